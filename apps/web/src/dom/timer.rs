use auth_forms::Timer;
use gloo_timers::future::TimeoutFuture;

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, millis: u32) -> impl Future<Output = ()> {
        TimeoutFuture::new(millis)
    }
}
