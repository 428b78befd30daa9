//! CSV export of the loaded table.
//!
//! The artifact is the full dataset in original order, UTF-8 with a leading
//! byte-order mark so spreadsheet tools pick the right encoding.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::oneshot;
use thiserror::Error;

use crate::core::config::{EXPORT_FILE_NAME, EXPORT_MIME};
use crate::dataset::Dataset;
use crate::t;

pub const BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Csv(Arc<csv::Error>),
    #[error("could not write export: {0}")]
    Io(Arc<io::Error>),
    #[error("no directory available for exports")]
    NoTargetDir,
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(Arc::new(err))
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

/// Serialize headers and every row, all columns, no filtering.
pub fn build_csv(dataset: &Dataset) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(BOM.to_vec());
    writer.write_record(dataset.headers())?;
    for row in dataset.rows() {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|err| ExportError::Io(Arc::new(err.into_error())))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, ExportError> {
        Ok(Self {
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
            bytes: build_csv(dataset)?,
        })
    }

    /// Write into `dir`, creating it if needed. Returns the written path.
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// The user's download folder, or the app data dir when there is none.
pub fn export_dir() -> Result<PathBuf, ExportError> {
    if let Some(download) = directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
    {
        return Ok(download);
    }
    directories::ProjectDirs::from("dev", "AcademiaDeBoxe", "Academia")
        .map(|dirs| dirs.data_dir().join("exports"))
        .ok_or(ExportError::NoTargetDir)
}

/// Build and save the export; the desktop counterpart of a browser download.
pub fn deliver(dataset: &Dataset) -> Result<PathBuf, ExportError> {
    let artifact = ExportArtifact::from_dataset(dataset)?;
    let path = artifact.save_to_dir(&export_dir()?)?;
    info!(
        path = %path.display(),
        bytes = artifact.bytes.len(),
        mime = artifact.mime,
        "dataset exported"
    );
    Ok(path)
}

/// Run `job` on a worker thread; the receiver resolves with its result.
pub fn in_background<T, F>(job: F) -> oneshot::Receiver<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        // Receiver dropped means the panel unmounted; nothing to report.
        let _ = tx.send(job());
    });
    rx
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

#[component]
pub fn ExportPanel(dataset: Arc<Dataset>) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);
    let rows = dataset.len();

    let feedback = match &*status.read() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some(("export__status".to_string(), t!("export-working"))),
        ExportStatus::Done(path) => Some((
            "export__status export__status--success".to_string(),
            format!("✅ {}", t!("export-done", path = path.clone())),
        )),
        ExportStatus::Error(reason) => Some((
            "export__status export__status--error".to_string(),
            format!("⚠️ {}", t!("export-failed", reason = reason.clone())),
        )),
    };
    let busy = matches!(*status.read(), ExportStatus::Working);

    let on_export = move |_| {
        if matches!(*status.peek(), ExportStatus::Working) {
            return;
        }
        status.set(ExportStatus::Working);
        let dataset = Arc::clone(&dataset);
        spawn(async move {
            let outcome = in_background(move || deliver(&dataset)).await;
            match outcome {
                Ok(Ok(path)) => status.set(ExportStatus::Done(path.display().to_string())),
                Ok(Err(err)) => {
                    error!(%err, "export failed");
                    status.set(ExportStatus::Error(err.to_string()));
                }
                Err(oneshot::Canceled) => {
                    error!("export worker exited without a result");
                    status.set(ExportStatus::Error(t!("export-interrupted")));
                }
            }
        });
    };

    rsx! {
        section { class: "export",
            h2 { class: "export__title", {t!("export-title")} }
            p { class: "export__description", {t!("export-description", rows = rows)} }
            button {
                r#type: "button",
                class: "button button--primary",
                disabled: busy,
                onclick: on_export,
                {t!("export-button")}
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::sample;

    #[test]
    fn output_starts_with_bom_and_header() {
        let bytes = build_csv(&sample()).unwrap();
        assert!(bytes.starts_with(BOM));
        let text = std::str::from_utf8(&bytes[BOM.len()..]).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("Nome,Idade,Calorias_Sessao"));
    }

    #[test]
    fn one_line_per_row_plus_header() {
        let dataset = sample();
        let bytes = build_csv(&dataset).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), dataset.len() + 1);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let bytes = build_csv(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"Silva, C.\""));
    }

    #[test]
    fn artifact_metadata() {
        let artifact = ExportArtifact::from_dataset(&sample()).unwrap();
        assert_eq!(artifact.file_name, "academia_boxe_export.csv");
        assert_eq!(artifact.mime, "text/csv");
    }

    #[test]
    fn save_creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("nested").join("exports");
        let artifact = ExportArtifact::from_dataset(&sample()).unwrap();
        let path = artifact.save_to_dir(&target).unwrap();
        assert_eq!(path, target.join(EXPORT_FILE_NAME));
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
    }

    #[test]
    fn background_save_resolves_with_written_path() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("exports");
        let artifact = ExportArtifact::from_dataset(&sample()).unwrap();
        let expected = artifact.bytes.clone();

        let receiver = in_background(move || artifact.save_to_dir(&dir));
        let path = futures::executor::block_on(receiver).unwrap().unwrap();
        assert_eq!(std::fs::read(path).unwrap(), expected);
    }

    #[test]
    fn background_errors_reach_the_receiver() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();
        let artifact = ExportArtifact::from_dataset(&sample()).unwrap();

        let receiver = in_background(move || artifact.save_to_dir(&blocker));
        let outcome = futures::executor::block_on(receiver).unwrap();
        assert!(matches!(outcome, Err(ExportError::Io(_))));
    }

    #[test]
    fn empty_dataset_exports_header_only() {
        let text = "Idade,Calorias_Sessao,Nivel,Frequencia_Semanal,Vitorias_Sparring,Derrotas_Sparring\n";
        let dataset = Dataset::from_reader(text.as_bytes()).unwrap();
        let bytes = build_csv(&dataset).unwrap();
        assert_eq!(&bytes[BOM.len()..], text.as_bytes());
    }
}
