fn main() {
    dioxus::launch(storefront::client::App);
}
