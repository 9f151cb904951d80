use std::path::PathBuf;

#[swift_bridge::bridge]
mod ffi {
    extern "Swift" {
        fn cache_dir() -> Option<String>;
    }
}

pub fn cache_dir() -> Option<PathBuf> {
    ffi::cache_dir().map(PathBuf::from)
}
