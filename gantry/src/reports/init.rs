//! Init command report.

use std::path::PathBuf;

use gantry_core::WriteResult;
use gantry_plan::Variant;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct InitReport {
    pub path: PathBuf,
    pub variant: Variant,
    pub result: WriteResult,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        if self.result == WriteResult::Skipped {
            out.unchanged_item(&path);
            out.preformatted(&format!("{path} already exists, left unchanged"));
            return;
        }

        out.added_item(&path);
        out.newline();
        out.preformatted("Next steps:");
        out.preformatted(&format!("  gantry plan      # preview the {} scaffold", self.variant));
        out.preformatted("  gantry run");
    }
}
