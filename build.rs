fn main() {
    // Emits $OUT_DIR/built.rs with package and git metadata
    built::write_built_file().expect("Failed to acquire build-time information");
}
