//! Dioxus components for the analysis page. They only lay out the records
//! produced by [`crate::charts`]; no shaping happens here.

mod bars;
mod bubble;
mod heatmap;
mod legend;
mod pie;
mod svg;
mod upload;
mod warnings;

pub use bars::BarChartCard;
pub use bubble::BubbleCard;
pub use heatmap::HeatmapCard;
pub use legend::ScaleLegend;
pub use pie::PieCard;
pub use upload::UploadPanel;
pub use warnings::WarningsList;

use crate::charts::AnalysisCharts;

/// The file picked in the upload panel, held until it is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadStatus {
    Idle,
    Selected,
    Analyzing,
    Done,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub status: UploadStatus,
    pub file: Option<SelectedFile>,
    pub charts: Option<AnalysisCharts>,
    /// Wall-clock time of the last successful analysis, already formatted.
    pub analyzed_at: Option<String>,
    /// Bumped on every selection so replies for an older file are dropped.
    generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            status: UploadStatus::Idle,
            file: None,
            charts: None,
            analyzed_at: None,
            generation: 0,
        }
    }
}

impl DashboardState {
    /// A new selection drops whatever the previous upload produced.
    pub fn select(&mut self, file: SelectedFile) {
        self.file = Some(file);
        self.charts = None;
        self.analyzed_at = None;
        self.status = UploadStatus::Selected;
        self.generation += 1;
    }

    /// Marks the selected file as in flight and returns the tag its reply
    /// must carry.
    pub fn start(&mut self) -> u64 {
        self.status = UploadStatus::Analyzing;
        self.generation
    }

    pub fn is_busy(&self) -> bool {
        self.status == UploadStatus::Analyzing
    }

    pub fn can_analyze(&self) -> bool {
        self.file.is_some() && !self.is_busy()
    }

    /// Returns false when the reply belongs to a superseded selection.
    pub fn finish(&mut self, generation: u64, charts: AnalysisCharts, analyzed_at: Option<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.charts = Some(charts);
        self.analyzed_at = analyzed_at;
        self.status = UploadStatus::Done;
        true
    }

    pub fn fail(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.charts = None;
        self.status = UploadStatus::Error(message);
        true
    }

    /// Failures that happen before any request, such as an unreadable file.
    pub fn reject(&mut self, message: String) {
        self.charts = None;
        self.analyzed_at = None;
        self.status = UploadStatus::Error(message);
        self.generation += 1;
    }
}
