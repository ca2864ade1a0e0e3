#[cfg(target_arch = "wasm32")]
fn main() {
    edubook_frontend::boot();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("edubook-frontend runs in the browser; build it for wasm32-unknown-unknown");
}
