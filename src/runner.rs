use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{PatchError, PatchResult};
use crate::patch::{FileReport, Patch};

/// Apply `patch` to each of its targets under `root`, in order.
///
/// Prints `Updated <file>` after every write and the patch trailer at the
/// end. The first failing file stops the run; files before it stay written.
pub fn run_patch<W: Write>(
    root: &Path,
    patch: &Patch,
    out: &mut W,
) -> PatchResult<Vec<FileReport>> {
    info!(
        "Applying {} to {} file(s) in {}",
        patch.name,
        patch.targets.len(),
        root.display()
    );

    let mut reports = Vec::with_capacity(patch.targets.len());
    for target in patch.targets {
        let report = patch.apply_to_file(root, target)?;
        debug!(
            "{}: {} -> {} bytes",
            report.path.display(),
            report.bytes_before,
            report.bytes_after
        );
        writeln!(out, "Updated {}", target).map_err(PatchError::output_error)?;
        reports.push(report);
    }

    if let Some(trailer) = patch.trailer {
        writeln!(out, "{}", trailer).map_err(PatchError::output_error)?;
    }

    let changed = reports.iter().filter(|r| r.changed()).count();
    info!("{}: {} of {} file(s) changed", patch.name, changed, reports.len());

    Ok(reports)
}
