#[cfg(target_os = "ios")]
mod apple;
#[cfg(target_os = "ios")]
pub use apple::*;

#[cfg(target_os = "android")]
mod android;
#[cfg(target_os = "android")]
pub use android::*;

// Desktop targets resolve through the `dirs` crate directly in lib.rs.
