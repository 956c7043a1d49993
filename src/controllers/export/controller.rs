use crate::controllers::export::errors::ExportError;
use crate::controllers::export::request::ExportRequest;
use crate::controllers::export::status::{ExportStatus, IDLE};
use crate::controllers::ports::image_encoder::ImageEncoderPort;
use crate::core::actions::render::mandelbrot::render_image;
use log::{error, info, warn};
use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Instant;

struct SharedState {
    /// `IDLE` or the running job's progress percentage.
    slot: AtomicI32,
    last_started_job: AtomicU64,
    last_finished_job: AtomicU64,
    last_succeeded_job: AtomicU64,
    active_request: Mutex<Option<ExportRequest>>,
    encoder: Arc<dyn ImageEncoderPort>,
}

impl SharedState {
    fn active_request(&self) -> MutexGuard<'_, Option<ExportRequest>> {
        self.active_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn report_progress(&self, percent: u8) {
        self.slot.fetch_max(i32::from(percent), Ordering::Relaxed);
    }

    fn release(&self, job_id: u64) {
        self.active_request().take();
        self.last_finished_job.store(job_id, Ordering::Release);
        self.slot.store(IDLE, Ordering::Release);
    }
}

/// Returns the slot to idle however the worker exits, including by panic.
struct JobGuard<'a> {
    shared: &'a SharedState,
    job_id: u64,
}

impl Drop for JobGuard<'_> {
    fn drop(&mut self) {
        self.shared.release(self.job_id);
    }
}

/// Runs at most one export render on a background thread.
pub struct ExportController {
    shared: Arc<SharedState>,
}

/// Returned by [`ExportController::start_export`]; only used to poll the job.
#[derive(Clone)]
pub struct ExportHandle {
    job_id: u64,
    shared: Arc<SharedState>,
}

impl ExportController {
    pub fn new(encoder: Arc<dyn ImageEncoderPort>) -> Self {
        Self {
            shared: Arc::new(SharedState {
                slot: AtomicI32::new(IDLE),
                last_started_job: AtomicU64::new(0),
                last_finished_job: AtomicU64::new(0),
                last_succeeded_job: AtomicU64::new(0),
                active_request: Mutex::new(None),
                encoder,
            }),
        }
    }

    /// Starts rendering `request` on a new thread.
    ///
    /// Refused with [`ExportError::AlreadyRunning`] while another export holds
    /// the slot; the running job is left untouched.
    pub fn start_export(&self, request: ExportRequest) -> Result<ExportHandle, ExportError> {
        // The snapshot lock is held across the claim so no reader sees a
        // running slot without its request.
        let job_id = {
            let mut active = self.shared.active_request();
            if self
                .shared
                .slot
                .compare_exchange(IDLE, 0, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                warn!(
                    "export to {} ignored: an export is already running",
                    request.output_path.display()
                );
                return Err(ExportError::AlreadyRunning);
            }

            *active = Some(request.clone());
            self.shared.last_started_job.fetch_add(1, Ordering::AcqRel) + 1
        };

        let worker_shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name("export-render".into())
            .spawn(move || {
                Self::run_job(&worker_shared, job_id, request);
            });

        match spawned {
            Ok(_) => Ok(ExportHandle {
                job_id,
                shared: Arc::clone(&self.shared),
            }),
            Err(err) => {
                error!("could not start export worker: {}", err);
                self.shared.release(job_id);
                Err(ExportError::Spawn(err))
            }
        }
    }

    /// Lock-free read of the slot.
    #[must_use]
    pub fn status(&self) -> ExportStatus {
        ExportStatus::from_slot(self.shared.slot.load(Ordering::Acquire))
    }

    /// The snapshot the running export was started with. Set before the slot
    /// reads as running and cleared after the job ends.
    #[must_use]
    pub fn active_request(&self) -> Option<ExportRequest> {
        self.shared.active_request().clone()
    }

    /// Number of exports that have run to an end, successful or not.
    #[must_use]
    pub fn completed_jobs(&self) -> u64 {
        self.shared.last_finished_job.load(Ordering::Acquire)
    }

    fn run_job(shared: &SharedState, job_id: u64, request: ExportRequest) {
        let _guard = JobGuard { shared, job_id };
        let progress = |percent: u8| shared.report_progress(percent);

        info!(
            "starting export {}: {}x{}, {} iterations",
            job_id,
            request.width,
            request.height,
            request.config.max_iterations()
        );

        let start = Instant::now();
        let buffer = match render_image(
            &request.viewport,
            &request.config,
            request.width,
            request.height,
            &progress,
        ) {
            Ok(buffer) => buffer,
            Err(err) => {
                error!("export {} aborted: {}", job_id, err);
                return;
            }
        };
        info!("rendering took {}ms", start.elapsed().as_millis());

        info!("saving {}", request.output_path.display());
        let start = Instant::now();
        match shared.encoder.encode_png(&request.output_path, buffer) {
            Ok(()) => {
                info!("saving took {}ms", start.elapsed().as_millis());
                shared.last_succeeded_job.store(job_id, Ordering::Release);
            }
            Err(err) => error!(
                "could not write output image {}: {}",
                request.output_path.display(),
                err
            ),
        }
    }
}

impl ExportHandle {
    #[must_use]
    pub fn job_id(&self) -> u64 {
        self.job_id
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.shared.last_finished_job.load(Ordering::Acquire) >= self.job_id
    }

    /// `None` while running; afterwards whether the image was written.
    #[must_use]
    pub fn succeeded(&self) -> Option<bool> {
        if !self.is_finished() {
            return None;
        }

        Some(self.shared.last_succeeded_job.load(Ordering::Acquire) == self.job_id)
    }

    /// Status of this job only. The slot is read before the finished check,
    /// so a later export that reuses the slot never shows through.
    #[must_use]
    pub fn status(&self) -> ExportStatus {
        let slot = self.shared.slot.load(Ordering::Acquire);
        if self.is_finished() {
            return ExportStatus::Idle;
        }

        ExportStatus::from_slot(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::export::request::ExportSettings;
    use crate::controllers::ports::image_encoder::EncodeError;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::render_config::RenderConfig;
    use crate::core::data::viewport::Viewport;
    use std::path::{Path, PathBuf};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingEncoder {
        encoded: Mutex<Vec<(PathBuf, u32, u32, Vec<u8>)>>,
    }

    impl ImageEncoderPort for RecordingEncoder {
        fn encode_png(&self, path: &Path, buffer: PixelBuffer) -> Result<(), EncodeError> {
            let (width, height) = (buffer.width(), buffer.height());
            self.encoded.lock().unwrap().push((
                path.to_path_buf(),
                width,
                height,
                buffer.into_data(),
            ));
            Ok(())
        }
    }

    struct GatedEncoder {
        gate: Mutex<Receiver<()>>,
    }

    impl GatedEncoder {
        fn new() -> (Self, Sender<()>) {
            let (sender, receiver) = mpsc::channel();
            (
                Self {
                    gate: Mutex::new(receiver),
                },
                sender,
            )
        }
    }

    impl ImageEncoderPort for GatedEncoder {
        fn encode_png(&self, _path: &Path, _buffer: PixelBuffer) -> Result<(), EncodeError> {
            let _ = self.gate.lock().unwrap().recv();
            Ok(())
        }
    }

    struct FailingEncoder {}

    impl ImageEncoderPort for FailingEncoder {
        fn encode_png(&self, _path: &Path, _buffer: PixelBuffer) -> Result<(), EncodeError> {
            Err(EncodeError::Io(std::io::Error::other("disk full")))
        }
    }

    struct PanickingEncoder {}

    impl ImageEncoderPort for PanickingEncoder {
        fn encode_png(&self, _path: &Path, _buffer: PixelBuffer) -> Result<(), EncodeError> {
            panic!("encoder blew up");
        }
    }

    fn small_request(path: &str) -> ExportRequest {
        let settings = ExportSettings {
            width: 16,
            max_iterations: 20,
            output_path: PathBuf::from(path),
        };

        ExportRequest::new(&Viewport::default(), &RenderConfig::default(), 100, 50, &settings)
    }

    fn wait_until_finished(handle: &ExportHandle, timeout: Duration) -> bool {
        let start = Instant::now();
        while !handle.is_finished() {
            if start.elapsed() >= timeout {
                return false;
            }
            thread::sleep(Duration::from_millis(5));
        }
        true
    }

    #[test]
    fn test_starts_idle() {
        let controller = ExportController::new(Arc::new(RecordingEncoder::default()));

        assert_eq!(controller.status(), ExportStatus::Idle);
        assert!(controller.active_request().is_none());
        assert_eq!(controller.completed_jobs(), 0);
    }

    #[test]
    fn test_export_hands_finished_buffer_to_encoder() {
        let encoder = Arc::new(RecordingEncoder::default());
        let controller =
            ExportController::new(Arc::clone(&encoder) as Arc<dyn ImageEncoderPort>);

        let handle = controller.start_export(small_request("a.png")).unwrap();

        assert!(wait_until_finished(&handle, Duration::from_secs(5)));
        assert_eq!(handle.status(), ExportStatus::Idle);
        assert_eq!(handle.succeeded(), Some(true));
        assert_eq!(controller.status(), ExportStatus::Idle);
        assert!(controller.active_request().is_none());

        let encoded = encoder.encoded.lock().unwrap();
        assert_eq!(encoded.len(), 1);
        let (path, width, height, data) = &encoded[0];
        assert_eq!(path, &PathBuf::from("a.png"));
        assert_eq!((*width, *height), (16, 8));
        assert_eq!(data.len(), 16 * 8 * 3);
    }

    #[test]
    fn test_second_export_is_rejected_while_running() {
        let (encoder, release) = GatedEncoder::new();
        let controller = ExportController::new(Arc::new(encoder));

        let first = controller.start_export(small_request("first.png")).unwrap();
        let second = controller.start_export(small_request("second.png"));

        assert!(matches!(second, Err(ExportError::AlreadyRunning)));
        assert!(controller.status().is_running());
        assert_eq!(
            controller.active_request().map(|r| r.output_path),
            Some(PathBuf::from("first.png"))
        );

        release.send(()).unwrap();
        assert!(wait_until_finished(&first, Duration::from_secs(5)));
        assert_eq!(controller.status(), ExportStatus::Idle);
    }

    #[test]
    fn test_progress_reaches_completion_before_encoding() {
        let (encoder, release) = GatedEncoder::new();
        let controller = ExportController::new(Arc::new(encoder));

        let handle = controller.start_export(small_request("progress.png")).unwrap();

        let start = Instant::now();
        while controller.status() != (ExportStatus::Running { progress: 100 }) {
            assert!(start.elapsed() < Duration::from_secs(5), "render never completed");
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!handle.is_finished());
        assert_eq!(handle.succeeded(), None);

        release.send(()).unwrap();
        assert!(wait_until_finished(&handle, Duration::from_secs(5)));
    }

    #[test]
    fn test_out_of_order_reports_never_lower_progress() {
        let controller = ExportController::new(Arc::new(RecordingEncoder::default()));
        controller.shared.slot.store(0, Ordering::Release);

        controller.shared.report_progress(50);
        controller.shared.report_progress(30);

        assert_eq!(controller.status(), ExportStatus::Running { progress: 50 });

        controller.shared.report_progress(100);
        assert_eq!(controller.status(), ExportStatus::Running { progress: 100 });
    }

    #[test]
    fn test_running_status_always_has_a_snapshot() {
        let (encoder, release) = GatedEncoder::new();
        let controller = Arc::new(ExportController::new(Arc::new(encoder)));

        let poller = {
            let controller = Arc::clone(&controller);
            thread::spawn(move || {
                let start = Instant::now();
                while !controller.status().is_running() {
                    assert!(start.elapsed() < Duration::from_secs(5), "export never started");
                    std::hint::spin_loop();
                }
                controller.active_request().map(|r| r.output_path)
            })
        };

        let handle = controller.start_export(small_request("seen.png")).unwrap();

        assert_eq!(poller.join().unwrap(), Some(PathBuf::from("seen.png")));
        release.send(()).unwrap();
        assert!(wait_until_finished(&handle, Duration::from_secs(5)));
    }

    #[test]
    fn test_finished_handle_ignores_later_export() {
        let (encoder, release) = GatedEncoder::new();
        let controller = ExportController::new(Arc::new(encoder));

        let first = controller.start_export(small_request("first.png")).unwrap();
        release.send(()).unwrap();
        assert!(wait_until_finished(&first, Duration::from_secs(5)));

        let second = controller.start_export(small_request("second.png")).unwrap();

        assert!(controller.status().is_running());
        assert_eq!(first.status(), ExportStatus::Idle);
        assert!(second.status().is_running());

        release.send(()).unwrap();
        assert!(wait_until_finished(&second, Duration::from_secs(5)));
    }

    #[test]
    fn test_encoder_failure_returns_to_idle() {
        let controller = ExportController::new(Arc::new(FailingEncoder {}));

        let handle = controller.start_export(small_request("fail.png")).unwrap();

        assert!(wait_until_finished(&handle, Duration::from_secs(5)));
        assert_eq!(handle.succeeded(), Some(false));
        assert_eq!(controller.status(), ExportStatus::Idle);
        assert_eq!(controller.completed_jobs(), 1);
        assert!(controller.start_export(small_request("retry.png")).is_ok());
    }

    #[test]
    fn test_encoder_panic_does_not_wedge_slot() {
        let controller = ExportController::new(Arc::new(PanickingEncoder {}));

        let handle = controller.start_export(small_request("panic.png")).unwrap();

        assert!(wait_until_finished(&handle, Duration::from_secs(5)));
        assert_eq!(controller.status(), ExportStatus::Idle);
    }

    #[test]
    fn test_unallocatable_export_aborts_without_encoding() {
        let encoder = Arc::new(RecordingEncoder::default());
        let controller =
            ExportController::new(Arc::clone(&encoder) as Arc<dyn ImageEncoderPort>);
        let mut request = small_request("huge.png");
        request.width = u32::MAX;
        request.height = u32::MAX;

        let handle = controller.start_export(request).unwrap();

        assert!(wait_until_finished(&handle, Duration::from_secs(5)));
        assert_eq!(handle.succeeded(), Some(false));
        assert_eq!(controller.status(), ExportStatus::Idle);
        assert!(encoder.encoded.lock().unwrap().is_empty());
    }

    #[test]
    fn test_sequential_exports_get_increasing_job_ids() {
        let controller = ExportController::new(Arc::new(RecordingEncoder::default()));

        let first = controller.start_export(small_request("1.png")).unwrap();
        assert!(wait_until_finished(&first, Duration::from_secs(5)));
        let second = controller.start_export(small_request("2.png")).unwrap();
        assert!(wait_until_finished(&second, Duration::from_secs(5)));

        assert!(second.job_id() > first.job_id());
        assert_eq!(controller.completed_jobs(), second.job_id());
    }
}
