fn main() {
    // Embedded assets: rebuild when the front-end or seed roster changes
    println!("cargo:rerun-if-changed=static");
    println!("cargo:rerun-if-changed=seed");
}
