//! Scripted transport and recording pacer shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mutesync_driver::Pacer;
use mutesync_transport::{Frame, Transport, TransportDeviceInfo, TransportError};

/// Everything the event loop did, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Write(Vec<u8>),
    Pause(Duration),
}

pub type OpLog = Arc<Mutex<Vec<Op>>>;

/// One scripted answer to `Transport::read`
pub enum ReadStep {
    Data(Vec<u8>),
    Timeout,
    Fail(io::ErrorKind),
    /// Clear the shutdown flag, then report a timeout
    Stop(Arc<AtomicBool>),
}

/// Transport that replays scripted reads and records writes.
/// Once the script runs out every read reports `Disconnected`.
pub struct ScriptedTransport {
    info: TransportDeviceInfo,
    reads: VecDeque<ReadStep>,
    log: OpLog,
    fail_writes: bool,
}

impl ScriptedTransport {
    pub fn new(reads: Vec<ReadStep>, log: OpLog) -> Self {
        Self {
            info: TransportDeviceInfo::from_path("/dev/ttyTEST0"),
            reads: reads.into(),
            log,
            fail_writes: false,
        }
    }

    pub fn failing_writes(log: OpLog) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(Vec::new(), log)
        }
    }

    pub fn remaining_reads(&self) -> usize {
        self.reads.len()
    }
}

impl Transport for ScriptedTransport {
    fn write_frame(&mut self, frame: &Frame) -> Result<(), TransportError> {
        if self.fail_writes {
            return Err(TransportError::Io(io::Error::from(io::ErrorKind::BrokenPipe)));
        }
        self.log
            .lock()
            .unwrap()
            .push(Op::Write(frame.as_bytes().to_vec()));
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        match self.reads.pop_front() {
            Some(ReadStep::Data(data)) => {
                buf[..data.len()].copy_from_slice(&data);
                Ok(data.len())
            }
            Some(ReadStep::Timeout) => Err(TransportError::Timeout),
            Some(ReadStep::Fail(kind)) => Err(TransportError::Io(io::Error::from(kind))),
            Some(ReadStep::Stop(running)) => {
                running.store(false, Ordering::SeqCst);
                Err(TransportError::Timeout)
            }
            None => Err(TransportError::Disconnected),
        }
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }
}

/// Pacer that records pauses into the shared log instead of sleeping
pub struct RecordingPacer {
    log: OpLog,
}

impl RecordingPacer {
    pub fn new(log: OpLog) -> Self {
        Self { log }
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) {
        self.log.lock().unwrap().push(Op::Pause(delay));
    }
}

pub fn new_log() -> OpLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn take_ops(log: &OpLog) -> Vec<Op> {
    std::mem::take(&mut *log.lock().unwrap())
}

pub const STEP: Duration = Duration::from_millis(100);

pub const RED_GREEN: [u8; 13] = [65, 255, 0, 0, 0, 128, 0, 255, 0, 0, 0, 128, 0];
pub const GREEN_RED: [u8; 13] = [65, 0, 128, 0, 255, 0, 0, 0, 128, 0, 255, 0, 0];
pub const OFF: [u8; 13] = [65, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// The four operations of one attract animation
pub fn attract_ops() -> Vec<Op> {
    vec![
        Op::Write(RED_GREEN.to_vec()),
        Op::Pause(STEP),
        Op::Write(GREEN_RED.to_vec()),
        Op::Pause(STEP),
    ]
}

pub fn off_op() -> Op {
    Op::Write(OFF.to_vec())
}

/// Startup sequence: animation then off
pub fn startup_ops() -> Vec<Op> {
    let mut ops = attract_ops();
    ops.push(off_op());
    ops
}
