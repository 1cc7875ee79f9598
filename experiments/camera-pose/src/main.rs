mod viewer;

use {
    base::{default_level, init_stdout_logger, level_from_env},
    capture::{CaptureConfig, CaptureError, FrameBuffer, V4l2Provider, VideoCapture, presentation_context},
    minifb::{Key, KeyRepeat, Window, WindowOptions},
    pose::{NullEstimator, PoseEstimate, PoseWorker},
    std::{
        env,
        path::PathBuf,
        sync::{Arc, Mutex},
    },
    viewer::{Viewer, rotate},
};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

fn report(action: &'static str) -> impl FnOnce(Result<(), CaptureError>) + Send + 'static {
    move |result| {
        if let Err(error) = result {
            log::error!("Failed to {} camera: {}", action, error);
        }
    }
}

fn device_path(name: &str, default: &str) -> PathBuf {
    env::var(name).unwrap_or_else(|_| default.to_string()).into()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger(level_from_env("CAMERA_POSE_LOG", default_level()));

    let provider = V4l2Provider::default()
        .with_front(Some(device_path("CAMERA_POSE_FRONT", "/dev/video0")))
        .with_back(Some(device_path("CAMERA_POSE_BACK", "/dev/video1")));

    // completions, frames and estimates all run on this thread
    let (presenter, mut present_loop) = presentation_context();
    let viewer = Arc::new(Mutex::new(Viewer::default()));

    let pose = PoseWorker::spawn(NullEstimator, presenter.clone(), {
        let viewer = Arc::clone(&viewer);
        move |estimate: PoseEstimate| {
            viewer.lock().unwrap_or_else(|e| e.into_inner()).on_estimate(estimate);
        }
    })?;

    let capture = VideoCapture::new(provider, presenter, CaptureConfig::default())?;
    capture.set_delegate(Some(Arc::new({
        let viewer = Arc::clone(&viewer);
        let submitter = pose.submitter();
        move |frame: Option<FrameBuffer>| {
            let image = viewer.lock().unwrap_or_else(|e| e.into_inner()).on_frame(frame);
            if let Some(image) = image {
                submitter.submit(image);
            }
        }
    })));
    let orientation = capture.orientation();

    capture.set_up(report("set up"));
    capture.start(report("start"));

    let mut window = Window::new(
        "Camera Pose - F flip, O rotate, ESC exit",
        WIDTH,
        HEIGHT,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(30);

    log::info!("F flips the camera, O rotates, ESC exits");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        present_loop.run_pending();

        let display = {
            let mut viewer = viewer.lock().unwrap_or_else(|e| e.into_inner());
            if viewer.failed() {
                log::error!("Captured image is missing");
                return Err("capture delivered no image".into());
            }
            viewer.take_display()
        };

        if window.is_key_pressed(Key::F, KeyRepeat::No) {
            capture.flip(report("flip"));
        }
        if window.is_key_pressed(Key::O, KeyRepeat::No) {
            let rotated = rotate(orientation.get());
            log::info!("rotating to {:?}", rotated);
            orientation.set(rotated);
            capture.set_up(report("set up"));
            capture.start(report("start"));
        }

        match display.and_then(|image| image.to_u32().map(|buffer| (image.size, buffer))) {
            Some((size, buffer)) => window.update_with_buffer(&buffer, size.x, size.y)?,
            None => window.update(),
        }
    }

    log::info!("exiting");
    Ok(())
}
