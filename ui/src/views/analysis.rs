use dioxus::prelude::*;

use crate::dashboard::{
    BarChartCard, BubbleCard, DashboardState, HeatmapCard, PieCard, UploadPanel, WarningsList,
};
use crate::t;

/// Upload an event log and show every chart the service returned for it.
#[component]
pub fn Analysis() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let state = use_signal(DashboardState::default);
    let charts = state.read().charts.clone();

    rsx! {
        section { class: "page page-analysis",
            h1 { {t!("page-analysis-title")} }
            p { {t!("page-analysis-intro")} }

            UploadPanel { state: state }

            match charts {
                Some(charts) if charts.is_empty() => rsx! {
                    p { class: "page-analysis__empty", {t!("analysis-empty")} }
                    WarningsList { warnings: charts.warnings.clone() }
                },
                Some(charts) => rsx! {
                    WarningsList { warnings: charts.warnings.clone() }
                    div { class: "page-analysis__grid",
                        HeatmapCard { table: charts.heatmap.clone() }
                        BubbleCard { chart: charts.bubbles.clone() }
                        PieCard { slices: charts.item_costs.clone() }
                        for named in charts.bars.iter() {
                            BarChartCard { key: "{named.title}", named: named.clone() }
                        }
                    }
                },
                None => rsx! {},
            }
        }
    }
}
