use super::prelude::*;

use std::time::Instant;

/// Shades columns of pixels on the rayon thread pool into a write-once buffer,
/// then hands the finished pixels to the sink in the same order as [`super::NaiveRenderer`].
#[derive(Default, Copy, Clone, Debug)]
pub struct ParallelRenderer {
    threads: Option<usize>,
}

impl ParallelRenderer {
    /// `threads` of `None` uses the global rayon pool.
    pub fn new(threads: Option<usize>) -> ParallelRenderer {
        ParallelRenderer { threads }
    }

    /// A dedicated pool, only when the requested size differs from the pool we are already on.
    fn local_pool(&self) -> Option<rayon::ThreadPool> {
        let threads = self
            .threads
            .filter(|&threads| threads != rayon::current_num_threads())?;
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .inspect_err(|e| {
                warn!("failed to build a {} thread pool, using the global pool: {}", threads, e)
            })
            .ok()
    }

    fn render_columns(
        world: &World,
        camera: &ViewportCamera,
    ) -> Vec<(i32, Vec<Color>, Profile)> {
        let integrator = PhongIntegrator::new(world);
        camera
            .x_range()
            .into_par_iter()
            .map(|x| {
                let mut profile = Profile::default();
                let column = camera
                    .y_range()
                    .map(|y| integrator.color(camera.get_ray(x, y), &mut profile))
                    .collect();
                (x, column, profile)
            })
            .collect()
    }
}

impl Renderer for ParallelRenderer {
    fn render(
        &self,
        world: &World,
        camera: &ViewportCamera,
        sink: &mut dyn DisplaySink,
    ) -> Profile {
        let (width, height) = (camera.screen_width, camera.screen_height);
        info!("starting render with film resolution {}x{}", width, height);
        let now = Instant::now();

        let pool = self.local_pool();
        let columns = match &pool {
            Some(pool) => pool.install(|| Self::render_columns(world, camera)),
            None => Self::render_columns(world, camera),
        };
        let threads = pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, |p| p.current_num_threads());

        let mut profile = Profile::default();
        for (x, column, column_profile) in columns {
            profile = profile.combine(column_profile);
            for (y, color) in camera.y_range().zip(column) {
                sink.draw_pixel(Pixel::new(x, y, color));
            }
        }

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s on {} threads", elapsed, threads);
        profile.pretty_print(elapsed, threads);
        profile
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_local_pool_only_when_size_differs() {
        let current = rayon::current_num_threads();
        assert!(ParallelRenderer::new(None).local_pool().is_none());
        assert!(ParallelRenderer::new(Some(current)).local_pool().is_none());

        let pool = ParallelRenderer::new(Some(current + 1)).local_pool().unwrap();
        assert_eq!(pool.current_num_threads(), current + 1);
        // already inside a pool of the requested size
        pool.install(|| {
            assert!(ParallelRenderer::new(Some(current + 1)).local_pool().is_none());
        });
    }
}
