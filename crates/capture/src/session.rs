use {
    crate::*,
    std::sync::Arc,
    tokio::sync::mpsc,
};

/// Snapshot of the session, published by the worker after every command.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub position: Position,
    pub is_running: bool,
    pub preset: SessionPreset,
    pub has_input: bool,
    pub has_output: bool,
    pub output: Option<OutputOrientation>,
    pub device: Option<String>,
    pub format: Option<DeviceFormat>,
}

struct Input {
    name: String,
    format: DeviceFormat,
    // closed while the session is stopped
    open: bool,
    // moved onto the driver thread while streaming
    device: Option<Box<dyn CaptureDevice>>,
}

/// The live pipeline: one input, one output, and the driver streaming
/// between them. Only ever touched from the session worker.
pub(crate) struct CaptureSession {
    provider: Box<dyn DeviceProvider>,
    orientation: SharedOrientation,
    config: CaptureConfig,
    position: Position,
    preset: SessionPreset,
    input: Option<Input>,
    output: Option<OutputSettings>,
    driver: Option<Driver>,
    generation: u64,
    mailbox: Arc<SampleMailbox>,
    events: mpsc::UnboundedSender<Event>,
}

impl CaptureSession {
    pub fn new(
        provider: Box<dyn DeviceProvider>,
        orientation: SharedOrientation,
        config: CaptureConfig,
        mailbox: Arc<SampleMailbox>,
        events: mpsc::UnboundedSender<Event>,
    ) -> Self {
        Self {
            provider,
            orientation,
            position: config.position(),
            preset: config.preset(),
            config,
            input: None,
            output: None,
            driver: None,
            generation: 0,
            mailbox,
            events,
        }
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_some()
    }

    /// Rebuild input and output from scratch at the configured preset.
    ///
    /// On failure the session is left stopped with nothing attached.
    pub fn set_up(&mut self) -> Result<(), CaptureError> {
        self.stop();
        self.detach();
        self.preset = self.config.preset();
        let (input, output) = self.attach(self.position)?;
        self.commit(input, output);
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), CaptureError> {
        if self.driver.is_some() {
            return Ok(());
        }
        let (Some(input), Some(settings)) = (self.input.as_mut(), self.output) else {
            return Err(CaptureError::MissingSession);
        };
        let mut device = input
            .device
            .take()
            .ok_or_else(|| CaptureError::Unknown(format!("{} was lost", input.name)))?;
        if !input.open {
            let reopened = device
                .open(self.preset)
                .map_err(CaptureError::or_input)
                .and_then(|format| {
                    input.format = format;
                    device.configure_output(&settings).map_err(CaptureError::or_output)
                });
            if let Err(error) = reopened {
                device.close();
                input.device = Some(device);
                return Err(error);
            }
            input.open = true;
        }
        self.generation += 1;
        self.mailbox.clear();
        let context = DriverContext {
            preset: self.preset,
            settings,
            generation: self.generation,
            mailbox: Arc::clone(&self.mailbox),
            events: self.events.clone(),
            reconnect_delay: self.config.reconnect_delay(),
        };
        self.driver = Some(Driver::spawn(device, context)?);
        Ok(())
    }

    pub fn stop(&mut self) {
        let Some(driver) = self.driver.take() else {
            return;
        };
        self.generation += 1;
        let mut device = driver.stop();
        self.mailbox.clear();
        // halt the hardware, start reopens it
        if let Some(device) = device.as_mut() {
            device.close();
        }
        if let Some(input) = self.input.as_mut() {
            input.device = device;
            input.open = false;
        }
    }

    /// Switch to the camera on the other side.
    ///
    /// If the new camera cannot be attached, the previous one is reopened
    /// with its previous output and resumes streaming if it was running.
    pub fn flip(&mut self) -> Result<(), CaptureError> {
        let was_running = self.is_running();
        self.stop();

        let previous_output = self.output.take();
        let mut previous_input = self.input.take();
        if let Some(device) = previous_input.as_mut().and_then(|input| input.device.as_mut()) {
            device.close();
        }

        let position = self.position.flipped();
        match self.attach(position) {
            Ok((input, output)) => {
                self.position = position;
                self.commit(input, output);
            }
            Err(error) => {
                log::warn!("flip to {} failed, restoring {}: {}", position, self.position, error);
                self.restore(previous_input, previous_output);
                if was_running && self.input.is_some() {
                    if let Err(error) = self.start() {
                        log::error!("could not resume {} camera: {}", self.position, error);
                    }
                }
                return Err(error);
            }
        }

        if was_running {
            self.start()?;
        }
        Ok(())
    }

    /// Stop streaming and release the device.
    pub fn teardown(&mut self) {
        self.stop();
        self.detach();
    }

    /// Output settings and position a sample has to be delivered with, or
    /// `None` if it was produced under an older configuration.
    pub fn accept(&self, pending: &PendingSample) -> Option<(OutputSettings, Position)> {
        if pending.generation != self.generation || self.driver.is_none() {
            return None;
        }
        self.output.map(|output| (output, self.position))
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            position: self.position,
            is_running: self.is_running(),
            preset: self.preset,
            has_input: self.input.is_some(),
            has_output: self.output.is_some(),
            output: self.output.map(|output| output.orientation),
            device: self.input.as_ref().map(|input| input.name.clone()),
            format: self.input.as_ref().map(|input| input.format),
        }
    }

    fn commit(&mut self, input: Input, output: OutputSettings) {
        log::info!(
            "{} camera {} at {}x{} {:?}",
            self.position,
            input.name,
            input.format.size.x,
            input.format.size.y,
            output.orientation
        );
        self.input = Some(input);
        self.output = Some(output);
        self.generation += 1;
    }

    fn detach(&mut self) {
        self.output = None;
        if let Some(mut device) = self.input.take().and_then(|input| input.device) {
            device.close();
        }
    }

    // open the camera for `position` and wire an output to it
    fn attach(&mut self, position: Position) -> Result<(Input, OutputSettings), CaptureError> {
        let mut device = self
            .provider
            .discover(position)
            .ok_or_else(|| CaptureError::InvalidInput(format!("no {} camera available", position)))?;
        let format = device.open(self.preset).map_err(CaptureError::or_input)?;

        let settings = OutputSettings {
            orientation: OutputOrientation::resolve(self.orientation.get(), position),
            discard_late_samples: true,
        };
        let wired = if format.size.area() == 0 {
            Err(CaptureError::InvalidOutput(format!(
                "{} negotiated an empty frame size",
                device.name()
            )))
        } else {
            device.configure_output(&settings).map_err(CaptureError::or_output)
        };
        if let Err(error) = wired {
            device.close();
            return Err(error);
        }

        Ok((
            Input {
                name: device.name(),
                format,
                open: true,
                device: Some(device),
            },
            settings,
        ))
    }

    fn restore(&mut self, input: Option<Input>, output: Option<OutputSettings>) {
        let (Some(mut input), Some(output)) = (input, output) else {
            return;
        };
        let Some(mut device) = input.device.take() else {
            return;
        };
        let reopened = device.open(self.preset).and_then(|format| {
            input.format = format;
            device.configure_output(&output)
        });
        match reopened {
            Ok(()) => {
                input.device = Some(device);
                input.open = true;
                self.input = Some(input);
                self.output = Some(output);
                self.generation += 1;
            }
            Err(error) => {
                log::error!("could not restore {}: {}", input.name, error);
                device.close();
            }
        }
    }
}
