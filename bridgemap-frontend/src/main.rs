use bridgemap_core::{
    map::MarkerLayer,
    usecases::{plot_bridges, reset_view, setup_map},
};
use bridgemap_entities::map::Legend;
use bridgemap_gateways::proj4::Proj4Reprojector;
use leptos::*;

mod api;
mod components;
mod leaflet;
mod map;

use self::{components::*, map::LeafletMap};

const TITLE: &str = "South Dakota Bridges";
const CSV_URL: &str = "Bridges_Only.csv";

#[component]
fn App() -> impl IntoView {
    // -- signals -- //

    let (legend, set_legend) = create_signal(None::<Legend>);

    // -- map context -- //

    let leaflet_map = store_value(None::<LeafletMap>);
    let marker_layer = store_value(MarkerLayer::new());

    // -- callbacks -- //

    let on_brand_click = move || {
        leaflet_map.update_value(|map| {
            if let Some(map) = map {
                reset_view(map);
            }
        });
    };

    // -- init map -- //

    let container = create_node_ref::<html::Div>();
    container.on_load(move |el| {
        // Wait until the container has been attached to the document.
        request_animation_frame(move || {
            let mut map = LeafletMap::new(&el, set_legend);
            setup_map(&mut map);
            map.invalidate_size();
            leaflet_map.set_value(Some(map));
            spawn_local(async move {
                if let Err(err) = load_bridges(leaflet_map, marker_layer).await {
                    log::error!("Unable to load bridges: {err}");
                }
            });
        });
    });

    view! {
      <div class="app">
        <NavBar title=TITLE on_brand_click />
        <main>
          <div id="map" node_ref=container></div>
          <MapLegend legend />
        </main>
      </div>
    }
}

async fn load_bridges(
    leaflet_map: StoredValue<Option<LeafletMap>>,
    marker_layer: StoredValue<MarkerLayer>,
) -> anyhow::Result<()> {
    let reprojector = Proj4Reprojector::south_dakota_north()?;
    let csv_text = api::fetch_csv(CSV_URL).await?;
    leaflet_map.update_value(|map| {
        let Some(map) = map else {
            log::warn!("No leaflet map found");
            return;
        };
        marker_layer.update_value(|layer| {
            plot_bridges(map, &reprojector, layer, &csv_text);
        });
    });
    Ok(())
}

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    mount_to_body(|| view! { <App /> });
}
