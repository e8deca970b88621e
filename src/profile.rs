#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,        // one per pixel
    pub intersection_tests: usize, // ray-sphere tests
    pub object_hits: usize,        // camera rays that struck a surface
    pub background_hits: usize,    // camera rays that struck nothing
}

impl Profile {
    pub fn new(
        camera_rays: usize,
        intersection_tests: usize,
        object_hits: usize,
        background_hits: usize,
    ) -> Self {
        Profile {
            camera_rays,
            intersection_tests,
            object_hits,
            background_hits,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.intersection_tests + other.intersection_tests,
            self.object_hits + other.object_hits,
            self.background_hits + other.background_hits,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            intersection_tests,
            object_hits,
            background_hits,
        } = self;
        // tiny renders can finish inside the timer resolution
        let elapsed = elapsed.max(f32::EPSILON);
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} total intersection tests at {} per second and {} per second per thread",
            intersection_tests,
            intersection_tests as f32 / elapsed,
            intersection_tests as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} object hits, {} background hits",
            object_hits, background_hits
        );
    }
}
