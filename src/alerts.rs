//! Banner Auto-dismiss
//!
//! Every notification banner on the page is closed a fixed delay after
//! initialization. Timers and the banner widget are injected so the behavior
//! runs without a browser.

use std::rc::Rc;
use std::time::Duration;

use crate::error::FormError;

/// One-shot timers
pub trait Scheduler {
    fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

/// The banner widget's close behavior.
///
/// Implementations must accept banners that were already closed by the user.
pub trait BannerDismisser {
    type Banner;

    fn dismiss(&self, banner: &Self::Banner) -> Result<(), FormError>;
}

/// Schedule one dismissal per banner; returns how many were scheduled.
/// There is no way to cancel them.
pub fn schedule_auto_dismiss<D, S>(
    banners: Vec<D::Banner>,
    delay: Duration,
    scheduler: &S,
    dismisser: Rc<D>,
) -> usize
where
    D: BannerDismisser + 'static,
    D::Banner: 'static,
    S: Scheduler + ?Sized,
{
    let count = banners.len();
    for banner in banners {
        let dismisser = Rc::clone(&dismisser);
        scheduler.schedule_once(
            delay,
            Box::new(move || {
                if let Err(err) = dismisser.dismiss(&banner) {
                    log::warn!("[ALERTS] Could not close banner: {err}");
                }
            }),
        );
    }
    if count > 0 {
        log::debug!("[ALERTS] {count} banner(s) close in {}ms", delay.as_millis());
    }
    count
}
