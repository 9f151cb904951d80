//! Round-trip demo for the persistence helpers.
use filekit_persistence as persistence;

fn main() {
    let path = std::env::temp_dir().join("filekit-demo/hello.txt");

    println!("Saving to {}...", path.display());
    persistence::write(b"Hello from filekit!", &path).expect("write failed");

    let bytes = persistence::read(&path).expect("read failed");
    println!("Read back: {}", String::from_utf8_lossy(&bytes));

    persistence::delete(&path).expect("delete failed");
    println!("Cleaned up.");
}
