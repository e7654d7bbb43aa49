use leptos::*;

#[component]
pub fn NavBar<F>(title: &'static str, on_brand_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
      <nav>
        <a
          id="navbar-brand"
          href="#"
          on:click=move |ev| {
              ev.prevent_default();
              on_brand_click();
          }
        >
          {title}
        </a>
      </nav>
    }
}
