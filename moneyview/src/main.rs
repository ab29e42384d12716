use moneyview::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
