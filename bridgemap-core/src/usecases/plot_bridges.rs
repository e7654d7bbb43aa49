use super::{add_legend, bridge_marker, locate_bridge, prelude::*, SkipReason};
use crate::util::table::split_table;

/// Statistics of a single plotting pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlotSummary {
    pub rows: usize,
    pub placed: usize,
    pub short_rows: usize,
    pub not_a_number: usize,
    pub unprojectable: usize,
}

impl PlotSummary {
    pub const fn skipped(&self) -> usize {
        self.short_rows + self.not_a_number + self.unprojectable
    }

    fn count_skipped(&mut self, reason: &SkipReason) {
        match reason {
            SkipReason::ShortRow { .. } => self.short_rows += 1,
            SkipReason::NotANumber => self.not_a_number += 1,
            SkipReason::Unprojectable(_) => self.unprojectable += 1,
        }
    }
}

/// Puts a marker for each valid bridge row of the CSV text on the map.
///
/// Invalid rows are skipped silently. If the text has no data rows
/// at all, the map is left untouched. Otherwise the legend is added
/// after all markers.
pub fn plot_bridges<M, R>(
    map: &mut M,
    reprojector: &R,
    layer: &mut MarkerLayer,
    csv_text: &str,
) -> PlotSummary
where
    M: MapSurface,
    R: Reprojector,
{
    let mut summary = PlotSummary::default();
    let Some((header, rows)) = split_table(csv_text) else {
        log::debug!("Nothing to plot: the CSV data contains no rows");
        return summary;
    };
    for (index, row) in rows.enumerate() {
        summary.rows += 1;
        match locate_bridge(reprojector, &header, row) {
            Ok(bridge) => {
                let marker = bridge_marker(&header, &bridge);
                map.add_layer(Layer::Marker(marker.clone()));
                layer.push(marker, bridge.row);
                summary.placed += 1;
            }
            Err(reason) => {
                // The header is on line 1
                log::debug!("Skip line {}: {reason}", index + 2);
                summary.count_skipped(&reason);
            }
        }
    }
    add_legend(map);
    log::info!(
        "Placed {} of {} bridges ({} skipped)",
        summary.placed,
        summary.rows,
        summary.skipped()
    );
    summary
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::{
        super::tests::{FailingReprojector, FlatReprojector, MockMap},
        *,
    };
    use crate::{popup::EXCLUDED_COLUMNS, view::bridge_legend};

    fn plot(csv_text: &str) -> (MockMap, MarkerLayer, PlotSummary) {
        let mut map = MockMap::default();
        let mut layer = MarkerLayer::new();
        let summary = plot_bridges(&mut map, &FlatReprojector, &mut layer, csv_text);
        (map, layer, summary)
    }

    #[test]
    fn plot_single_bridge() {
        let (map, layer, summary) = plot("X,Y,NAME\n600000,0,Foo\n");
        assert_eq!(summary.placed, 1);
        assert_eq!(layer.len(), 1);
        let markers = map.markers();
        assert_eq!(markers.len(), 1);
        let expected = FlatReprojector
            .reproject(PlanarPoint::new(600_000.0, 0.0))
            .unwrap();
        assert_eq!(markers[0].pos, expected);
        assert_eq!(markers[0].popup.value("NAME"), Some("Foo"));
        assert!(!markers[0].popup.contains_column("X"));
        assert!(!markers[0].popup.contains_column("Y"));
        assert_eq!(layer.markers()[0].row.fields(), ["600000", "0", "Foo"]);
        assert_eq!(layer.markers()[0].marker, *markers[0]);
    }

    #[test]
    fn header_only() {
        let (map, layer, summary) = plot("X,Y,NAME\n");
        assert!(map.markers().is_empty());
        assert!(layer.is_empty());
        assert_eq!(summary.placed, 0);
        // the empty last line is too short
        assert_eq!(summary.short_rows, 1);
    }

    #[test]
    fn empty_input_leaves_the_map_untouched() {
        for text in ["", "X,Y,NAME"] {
            let (map, layer, summary) = plot(text);
            assert!(map.layers.is_empty());
            assert!(layer.is_empty());
            assert_eq!(summary, PlotSummary::default());
        }
    }

    #[test]
    fn non_numeric_x() {
        let (map, _, summary) = plot("X,Y,NAME\nabc,0,Foo\n");
        assert!(map.markers().is_empty());
        assert_eq!(summary.not_a_number, 1);
    }

    #[test]
    fn plot_rows_with_trailing_garbage_in_coordinates() {
        for csv in [
            "X,Y,NAME\n600000.5ft,0,Foo\n",
            "X,Y,NAME\n1e,2,Foo\n",
            "X,Y,NAME\n123abc,0,Foo\n",
        ] {
            let (map, _, summary) = plot(csv);
            assert_eq!(summary.placed, 1, "{csv}");
            assert_eq!(summary.not_a_number, 0, "{csv}");
            assert_eq!(map.markers().len(), 1);
        }
        let (map, _, _) = plot("X,Y,NAME\n600000.5ft,0,Foo\n");
        let expected = FlatReprojector
            .reproject(PlanarPoint::new(600_000.5, 0.0))
            .unwrap();
        assert_eq!(map.markers()[0].pos, expected);
    }

    #[test]
    fn skip_invalid_rows_only() {
        let csv = "X,Y,OBJECTID,BRIDGE_ID,NAME\n\
                   100,200,1,B-1,First\n\
                   100,200,2\n\
                   abc,200,3,B-3,Third\n\
                   300,xyz,4,B-4,Fourth\n\
                   500,600,5,B-5,Fifth,extra";
        let (map, layer, summary) = plot(csv);
        assert_eq!(
            summary,
            PlotSummary {
                rows: 5,
                placed: 2,
                short_rows: 1,
                not_a_number: 2,
                unprojectable: 0,
            }
        );
        let names = map
            .markers()
            .iter()
            .map(|m| m.popup.value("NAME").unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(names, ["First", "Fifth"]);
        assert_eq!(layer.markers()[1].row.len(), 6);
    }

    #[test]
    fn popup_never_shows_excluded_columns() {
        let csv = "X,Y,OBJECTID,BRIDGE_ID,NAME,FEATURE\n1,2,3,4,Foo,Creek\n";
        let (map, _, _) = plot(csv);
        let popup = &map.markers()[0].popup;
        for column in EXCLUDED_COLUMNS {
            assert!(!popup.contains_column(column));
        }
        assert_eq!(popup.value("NAME"), Some("Foo"));
        assert_eq!(popup.value("FEATURE"), Some("Creek"));
    }

    #[test]
    fn add_legend_after_markers() {
        let (map, _, _) = plot("X,Y,NAME\n1,2,Foo\n");
        assert!(matches!(map.layers.first(), Some(Layer::Marker(_))));
        assert_eq!(map.layers.last(), Some(&Layer::Legend(bridge_legend())));
    }

    #[test]
    fn count_unprojectable_rows() {
        let mut map = MockMap::default();
        let mut layer = MarkerLayer::new();
        let summary = plot_bridges(
            &mut map,
            &FailingReprojector,
            &mut layer,
            "X,Y,NAME\n1,2,Foo\n",
        );
        assert_eq!(summary.unprojectable, 1);
        assert_eq!(summary.placed, 0);
        assert!(layer.is_empty());
    }

    #[test]
    fn keep_previously_placed_markers() {
        let mut map = MockMap::default();
        let mut layer = MarkerLayer::new();
        plot_bridges(&mut map, &FlatReprojector, &mut layer, "X,Y\n1,2\n");
        plot_bridges(&mut map, &FlatReprojector, &mut layer, "X,Y\n3,4\n");
        assert_eq!(layer.len(), 2);
        assert_eq!(map.markers().len(), 2);
    }

    #[test]
    fn plotting_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut csv = String::from("X,Y,NAME");
        for i in 0..200 {
            let x: f64 = rng.gen_range(-1_000_000.0..3_000_000.0);
            let y: f64 = rng.gen_range(-500_000.0..1_000_000.0);
            csv.push_str(&format!("\n{x},{y},Bridge {i}"));
        }
        let positions = |csv: &str| {
            let (map, _, _) = plot(csv);
            map.markers().iter().map(|m| m.pos).collect::<Vec<_>>()
        };
        let first = positions(&csv);
        assert_eq!(first.len(), 200);
        assert_eq!(first, positions(&csv));
    }
}
