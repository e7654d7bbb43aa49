mod add_legend;
mod locate_bridge;
mod plot_bridges;
mod reset_view;
mod setup_map;


pub use self::{add_legend::*, locate_bridge::*, plot_bridges::*, reset_view::*, setup_map::*};

mod prelude {
    pub use crate::{
        entities::*,
        gateways::reproject::{self, Reprojector},
        map::*,
    };
}
