use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui_wgpu;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints};

use crate::data::loader::{COUNT_COLUMN, ENTRY_COLUMN};
use crate::data::table::FrequencyTable;
use crate::error::PlotError;
use crate::processing::downsampling;
use crate::processing::log_axis;
use crate::processing::statistics::{format_count, Summary};

/// Upper bound on drawn points per line segment in the visible range.
const MAX_DRAWN_POINTS: usize = 4000;

const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(31, 119, 180);

pub struct PlotOptions {
    pub title: String,
    pub source: PathBuf,
}

/// The frequency chart window.
pub struct FrequencyPlotApp {
    source: String,
    summary: Summary,
    row_count: usize,
    zero_rows: usize,
    /// Shared with the axis and hover formatters, which must be `'static`.
    names: Arc<[String]>,
    /// `[row, log10(count)]` runs between zero counts.
    segments: Vec<Vec<[f64; 2]>>,
}

impl FrequencyPlotApp {
    pub fn new(table: &FrequencyTable, summary: Summary, options: &PlotOptions) -> Self {
        let counts = table.counts();
        let zero_rows = counts.iter().filter(|&&c| c == 0).count();
        if zero_rows > 0 {
            tracing::warn!("{zero_rows} rows have a zero count and cannot be drawn on a log scale");
        }

        Self {
            source: options.source.display().to_string(),
            summary,
            row_count: table.len(),
            zero_rows,
            names: table.entry_names().into(),
            segments: log_axis::log_segments(&counts),
        }
    }

    fn show_summary_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&self.source).monospace());
            ui.separator();
            ui.label(format!("{} rows", self.row_count));
            if self.zero_rows > 0 {
                ui.label(format!("({} not drawn)", self.zero_rows))
                    .on_hover_text("Zero counts have no logarithm");
            }
            ui.separator();
            ui.label(format!("median: {}", format_count(self.summary.median)));
            ui.separator();
            ui.label(format!("mean: {:.3}", self.summary.mean));
        });
    }

    fn show_plot(&self, ui: &mut egui::Ui) {
        let axis_names = Arc::clone(&self.names);
        let hover_names = Arc::clone(&self.names);

        Plot::new("frequency_plot")
            .legend(Legend::default())
            .x_axis_label(ENTRY_COLUMN)
            .y_axis_label(format!("{COUNT_COLUMN} (log)"))
            .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                log_axis::entry_label(&axis_names, mark.value).to_string()
            })
            .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
                log_axis::format_decade(mark.value)
            })
            .y_grid_spacer(egui_plot::log_grid_spacer(10))
            .label_formatter(move |_name, point| {
                let name = log_axis::entry_label(&hover_names, point.x.round());
                format!("{name}\n{}", log_axis::count_at(point.y).round())
            })
            .show(ui, |plot_ui| {
                let bounds = plot_ui.plot_bounds();
                let (mut view_min, mut view_max) = (bounds.min()[0], bounds.max()[0]);
                // Before the first layout the bounds are empty; draw everything
                // so auto-bounds can see the data.
                if !(view_min.is_finite() && view_max.is_finite() && view_min < view_max) {
                    view_min = f64::NEG_INFINITY;
                    view_max = f64::INFINITY;
                }

                for segment in &self.segments {
                    let points =
                        downsampling::downsample_for_view(segment, view_min, view_max, MAX_DRAWN_POINTS);
                    if points.is_empty() {
                        continue;
                    }
                    plot_ui.line(
                        Line::new(PlotPoints::from(points))
                            .name(COUNT_COLUMN)
                            .color(LINE_COLOR)
                            .width(1.5),
                    );
                }
            });
    }
}

impl eframe::App for FrequencyPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("summary_bar").show(ctx, |ui| {
            self.show_summary_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_plot(ui);
        });
    }
}

fn native_options(title: &str) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        // Both glow and wgpu are compiled in; glow is the default.
        renderer: eframe::Renderer::Wgpu,
        wgpu_options: egui_wgpu::WgpuConfiguration {
            present_mode: eframe::wgpu::PresentMode::AutoVsync,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Open the chart and block until the user closes the window.
pub fn show(
    table: &FrequencyTable,
    summary: Summary,
    options: PlotOptions,
) -> Result<(), PlotError> {
    let native_options = native_options(&options.title);

    let app = FrequencyPlotApp::new(table, summary, &options);
    tracing::info!("Opening plot window for {} rows", app.row_count);

    eframe::run_native(
        &options.title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::FrequencyRow;

    #[test]
    fn plot_keeps_table_order() {
        let table: FrequencyTable = [
            FrequencyRow::new("zeta", 1),
            FrequencyRow::new("alpha", 1000),
            FrequencyRow::new("mu", 10),
        ]
        .into_iter()
        .collect();
        let summary = Summary::compute(&table).unwrap();
        let options = PlotOptions {
            title: "test".to_string(),
            source: PathBuf::from("out.csv"),
        };

        let app = FrequencyPlotApp::new(&table, summary, &options);

        assert_eq!(&*app.names, &["zeta", "alpha", "mu"]);
        assert_eq!(app.segments, vec![vec![[0.0, 0.0], [1.0, 3.0], [2.0, 1.0]]]);
        assert_eq!(app.zero_rows, 0);
    }

    #[test]
    fn zero_counts_are_tallied() {
        let table: FrequencyTable = [FrequencyRow::new("a", 5), FrequencyRow::new("b", 0)]
            .into_iter()
            .collect();
        let summary = Summary::compute(&table).unwrap();
        let options = PlotOptions {
            title: "test".to_string(),
            source: PathBuf::from("out.csv"),
        };

        let app = FrequencyPlotApp::new(&table, summary, &options);
        assert_eq!(app.zero_rows, 1);
        assert_eq!(app.segments.len(), 1);
    }

    #[test]
    fn window_uses_wgpu_renderer() {
        let options = native_options("Latin headword frequencies");

        assert!(matches!(options.renderer, eframe::Renderer::Wgpu));
        assert_eq!(
            options.viewport.title.as_deref(),
            Some("Latin headword frequencies")
        );
    }
}
