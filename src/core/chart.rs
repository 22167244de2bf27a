use crate::domain::model::{BerDataset, ChartArtifact, ResultFile, StylePreset};
use crate::utils::error::{PlotError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::fs;
use std::path::PathBuf;

// 7.5 x 6 in figure: 750x600 logical px, x3 for the 300 DPI raster.
const FIG_WIDTH: u32 = 750;
const FIG_HEIGHT: u32 = 600;
const RASTER_SCALE: u32 = 3;

const MARGIN: f64 = 15.0;
const LEFT_LABEL_AREA: f64 = 75.0;
const BOTTOM_LABEL_AREA: f64 = 60.0;

// Fixed viewport of the log axis; data outside is clipped from view.
const BER_FLOOR: f64 = 1e-5;
const BER_CEILING: f64 = 1.0;

const MEASURED_COLOR: RGBColor = RGBColor(0, 128, 0);
const REFERENCE_COLOR: RGBColor = RGBColor(255, 0, 0);

const MEASURED_LABEL: &str = "LDPC SPA BPSK";
const REFERENCE_LABEL: &str = "Uncoded BPSK (theory)";

/// Stateless figure builder: one call, one figure, one pair of files. The
/// style preset is owned here, handed in at construction.
pub struct ChartRenderer {
    images_dir: PathBuf,
    style: StylePreset,
}

impl ChartRenderer {
    pub fn new(images_dir: impl Into<PathBuf>, style: StylePreset) -> Self {
        Self {
            images_dir: images_dir.into(),
            style,
        }
    }

    /// Render the two-curve semi-log chart and persist PNG + SVG, named from
    /// the metadata tuple. Re-running with identical metadata overwrites the
    /// previous pair. The SVG is drawn into memory first so a drawing failure
    /// leaves nothing on disk.
    pub fn render(&self, file: &ResultFile, dataset: &BerDataset) -> Result<ChartArtifact> {
        fs::create_dir_all(&self.images_dir)?;

        let stem = file.metadata.output_stem();
        let png_path = self.images_dir.join(format!("{stem}.png"));
        let svg_path = self.images_dir.join(format!("{stem}.svg"));

        let mut svg_buf = String::new();
        {
            let root = SVGBackend::with_string(&mut svg_buf, (FIG_WIDTH, FIG_HEIGHT))
                .into_drawing_area();
            self.draw_chart(&root, file, dataset, 1.0)?;
        }

        {
            let root = BitMapBackend::new(
                &png_path,
                (FIG_WIDTH * RASTER_SCALE, FIG_HEIGHT * RASTER_SCALE),
            )
            .into_drawing_area();
            self.draw_chart(&root, file, dataset, f64::from(RASTER_SCALE))?;
        }

        fs::write(&svg_path, svg_buf.as_bytes())?;

        Ok(ChartArtifact { png_path, svg_path })
    }

    fn font_family(&self) -> FontFamily<'_> {
        match self.style.font_family.as_str() {
            "serif" => FontFamily::Serif,
            "sans-serif" => FontFamily::SansSerif,
            "monospace" => FontFamily::Monospace,
            other => FontFamily::Name(other),
        }
    }

    fn draw_chart<DB>(
        &self,
        root: &DrawingArea<DB, Shift>,
        file: &ResultFile,
        dataset: &BerDataset,
        scale: f64,
    ) -> Result<()>
    where
        DB: DrawingBackend,
    {
        let px = |pt: f64| pt * scale * 4.0 / 3.0;
        let family = self.font_family();

        let tick_font = FontDesc::new(family, px(self.style.base_pt), FontStyle::Normal);
        let axis_font = FontDesc::new(family, px(self.style.axis_label_pt), FontStyle::Normal);
        let legend_font = FontDesc::new(family, px(self.style.legend_pt), FontStyle::Normal);

        root.fill(&WHITE).map_err(PlotError::render)?;

        let (x_min, x_max) = x_extent(&dataset.eb_n0_db);

        let mut chart = ChartBuilder::on(root)
            .margin((MARGIN * scale) as i32)
            .set_label_area_size(LabelAreaPosition::Left, (LEFT_LABEL_AREA * scale) as i32)
            .set_label_area_size(LabelAreaPosition::Bottom, (BOTTOM_LABEL_AREA * scale) as i32)
            .build_cartesian_2d(x_min..x_max, (BER_FLOOR..BER_CEILING).log_scale())
            .map_err(PlotError::render)?;

        chart
            .configure_mesh()
            .x_desc("Eb/N0 [dB]")
            .y_desc("Bit Error Rate (BER)")
            .axis_desc_style(axis_font.clone().color(&BLACK))
            .label_style(tick_font.clone().color(&BLACK))
            .bold_line_style(BLACK.mix(0.20))
            .light_line_style(BLACK.mix(0.08))
            .y_label_formatter(&|v| format!("{v:.0e}"))
            .draw()
            .map_err(PlotError::render)?;

        let line_width = (px(2.0).round() as u32).max(1);
        let marker_width = (px(1.4).round() as u32).max(1);
        let marker_radius = (px(4.0).round() as i32).max(2);
        let legend_len = px(18.0) as i32;

        let measured = clip_to_viewport(&dataset.eb_n0_db, &dataset.ber_info);
        let reference = clip_to_viewport(&dataset.eb_n0_db, &dataset.ber_bpsk);

        let measured_line = ShapeStyle {
            color: MEASURED_COLOR.to_rgba(),
            filled: false,
            stroke_width: line_width,
        };
        let marker_style = ShapeStyle {
            color: MEASURED_COLOR.to_rgba(),
            filled: false,
            stroke_width: marker_width,
        };
        let reference_line = ShapeStyle {
            color: REFERENCE_COLOR.to_rgba(),
            filled: false,
            stroke_width: line_width,
        };

        chart
            .draw_series(LineSeries::new(measured.iter().copied(), measured_line))
            .map_err(PlotError::render)?
            .label(MEASURED_LABEL)
            .legend(move |(x, y)| Circle::new((x + legend_len / 2, y), marker_radius, marker_style));

        // open circles on top of the connecting line
        chart
            .draw_series(
                measured
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), marker_radius, marker_style)),
            )
            .map_err(PlotError::render)?;

        chart
            .draw_series(LineSeries::new(reference.iter().copied(), reference_line))
            .map_err(PlotError::render)?
            .label(REFERENCE_LABEL)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + legend_len, y)], reference_line)
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.9))
            .border_style(BLACK)
            .label_font(legend_font.color(&BLACK))
            .draw()
            .map_err(PlotError::render)?;

        self.draw_annotation(root, file, scale)?;

        root.present().map_err(PlotError::render)?;
        Ok(())
    }

    /// Parameter caption anchored near the lower-left interior of the plot
    /// area, self-contained enough to reproduce the run.
    fn draw_annotation<DB>(
        &self,
        root: &DrawingArea<DB, Shift>,
        file: &ResultFile,
        scale: f64,
    ) -> Result<()>
    where
        DB: DrawingBackend,
    {
        let px = |pt: f64| pt * scale * 4.0 / 3.0;
        let meta = &file.metadata;

        let lines = [
            "LDPC Parameters:".to_string(),
            format!("N = {}", meta.block_length),
            format!("wc = {}, wr = {}", meta.column_weight, meta.row_weight),
            format!("Rate R \u{2248} {:.4}", file.rate),
            format!("SPA iterations = {}", meta.iterations),
        ];

        let note_px = px(self.style.annotation_pt);
        let line_height = note_px * 1.45;
        let pad = note_px * 0.6;
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let box_w = note_px * 0.52 * longest as f64 + 2.0 * pad;
        let box_h = line_height * lines.len() as f64 + 2.0 * pad;

        let plot_left = (MARGIN + LEFT_LABEL_AREA) * scale;
        let plot_right = f64::from(FIG_WIDTH) * scale - MARGIN * scale;
        let plot_top = MARGIN * scale;
        let plot_bottom = f64::from(FIG_HEIGHT) * scale - (MARGIN + BOTTOM_LABEL_AREA) * scale;
        let plot_w = plot_right - plot_left;
        let plot_h = plot_bottom - plot_top;

        let x0 = (plot_left + 0.03 * plot_w) as i32;
        let y1 = (plot_bottom - 0.03 * plot_h) as i32;
        let y0 = y1 - box_h as i32;
        let x1 = x0 + box_w as i32;

        root.draw(&Rectangle::new(
            [(x0, y0), (x1, y1)],
            WHITE.mix(0.7).filled(),
        ))
        .map_err(PlotError::render)?;
        root.draw(&Rectangle::new(
            [(x0, y0), (x1, y1)],
            ShapeStyle {
                color: BLACK.to_rgba(),
                filled: false,
                stroke_width: (scale.round() as u32).max(1),
            },
        ))
        .map_err(PlotError::render)?;

        let note_font = FontDesc::new(self.font_family(), note_px, FontStyle::Normal);
        for (i, line) in lines.iter().enumerate() {
            let y = y0 + (pad + i as f64 * line_height) as i32;
            root.draw(&Text::new(
                line.clone(),
                (x0 + pad as i32, y),
                note_font.clone().color(&BLACK),
            ))
            .map_err(PlotError::render)?;
        }

        Ok(())
    }
}

fn x_extent(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if max - min <= f64::EPSILON {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.04;
    (min - pad, max + pad)
}

/// Pair up the series and keep only what the fixed viewport can show; values
/// outside [1e-5, 1] are clipped from view, not an error. Non-positive values
/// have no place on a log axis and are dropped the same way.
fn clip_to_viewport(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys.iter())
        .filter(|&(_, &y)| y >= BER_FLOOR && y <= BER_CEILING)
        .map(|(&x, &y)| (x, y))
        .collect()
}
