mod alert;
mod button;
mod carousel;
mod loader;
mod spinner;
mod toast;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use carousel::{Carousel, Slide};
pub(crate) use loader::PageLoader;
pub(crate) use spinner::{Spinner, SpinnerSize};
pub(crate) use toast::{use_toasts, ToastProvider};
