use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// LDPC run parameters carried by the result file name, never by its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFileMetadata {
    pub block_length: u32,
    pub column_weight: u32,
    pub row_weight: u32,
    pub iterations: u32,
}

impl ResultFileMetadata {
    /// Stem shared by both output images, deterministic in the parameter tuple.
    pub fn output_stem(&self) -> String {
        format!(
            "ldpc_ber_N{}_wc{}_wr{}_iter{}",
            self.block_length, self.column_weight, self.row_weight, self.iterations
        )
    }

    pub fn data_file_name(&self) -> String {
        format!("{}_data.csv", self.output_stem())
    }
}

/// Typed boundary object: once constructed, the rest of the pipeline never
/// touches raw capture strings or directory listings again.
#[derive(Debug, Clone)]
pub struct ResultFile {
    pub path: PathBuf,
    pub metadata: ResultFileMetadata,
    pub rate: f64,
}

/// Three index-aligned measurement sequences, in file order.
#[derive(Debug, Clone, Default)]
pub struct BerDataset {
    pub eb_n0_db: Vec<f64>,
    pub ber_info: Vec<f64>,
    pub ber_bpsk: Vec<f64>,
}

impl BerDataset {
    pub fn len(&self) -> usize {
        self.eb_n0_db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eb_n0_db.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ChartArtifact {
    pub png_path: PathBuf,
    pub svg_path: PathBuf,
}

/// Figure typography, owned by whoever constructs the renderer. One named
/// preset; no process-global style state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylePreset {
    pub font_family: String,
    pub base_pt: f64,
    pub axis_label_pt: f64,
    pub legend_pt: f64,
    pub annotation_pt: f64,
}

impl StylePreset {
    /// Serif academic preset (STIX-like math glyphs where the font provides
    /// them): base 14pt, axis labels 18pt, legend 14pt, annotation 13pt.
    pub fn academic() -> Self {
        Self {
            font_family: "serif".to_string(),
            base_pt: 14.0,
            axis_label_pt: 18.0,
            legend_pt: 14.0,
            annotation_pt: 13.0,
        }
    }
}

impl Default for StylePreset {
    fn default() -> Self {
        Self::academic()
    }
}
