//! Mock-Hardware für die Host-Tests
//!
//! Alle Mocks schreiben in ein gemeinsames [`EventLog`], damit Tests die
//! Reihenfolge von Bus-Zugriffen, Wartezeiten, LED und Konsole prüfen können.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use esp_core::{BusError, BusTransport, ButtonInput, Console, Indicator, Report};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Write { address: u8, bytes: Vec<u8> },
    Read { address: u8, requested: usize },
    DelayMs(u32),
    Indicator(bool),
    Line(String),
}

#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn indicator_changes(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Indicator(on) => Some(on),
                _ => None,
            })
            .collect()
    }

    pub fn reads(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Read { .. }))
            .count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// ============================================================================
// Mock Bus
// ============================================================================

/// Antwort des Mock-Busses auf einen Lesezugriff
#[derive(Debug, Clone)]
pub enum ReadReply {
    /// Diese Bytes liefern (ggf. weniger als angefordert)
    Bytes(Vec<u8>),
    Fail(BusError),
}

pub struct MockBus {
    log: EventLog,
    replies: VecDeque<ReadReply>,
    /// Simuliere Fehler beim nächsten write()
    pub fail_next_write: Option<BusError>,
    /// Simuliere einen Write, der 0 Bytes überträgt
    pub short_next_write: bool,
}

impl MockBus {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            replies: VecDeque::new(),
            fail_next_write: None,
            short_next_write: false,
        }
    }

    pub fn reply(mut self, reply: ReadReply) -> Self {
        self.replies.push_back(reply);
        self
    }

    pub fn reply_bytes(self, bytes: &[u8]) -> Self {
        self.reply(ReadReply::Bytes(bytes.to_vec()))
    }
}

impl BusTransport for MockBus {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<usize, BusError> {
        if let Some(err) = self.fail_next_write.take() {
            return Err(err);
        }
        if self.short_next_write {
            self.short_next_write = false;
            return Ok(0);
        }

        self.log.push(Event::Write {
            address,
            bytes: bytes.to_vec(),
        });
        Ok(bytes.len())
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<usize, BusError> {
        self.log.push(Event::Read {
            address,
            requested: buffer.len(),
        });

        match self.replies.pop_front() {
            Some(ReadReply::Bytes(bytes)) => {
                let n = bytes.len().min(buffer.len());
                buffer[..n].copy_from_slice(&bytes[..n]);
                Ok(n)
            }
            Some(ReadReply::Fail(err)) => Err(err),
            None => Ok(0),
        }
    }
}

// ============================================================================
// Mock Taster / LED / Konsole / Delay
// ============================================================================

/// Taster mit vorgegebener Abtastfolge, danach immer losgelassen
pub struct ScriptedButton {
    samples: VecDeque<bool>,
    pub sample_count: usize,
}

impl ScriptedButton {
    pub fn new(samples: &[bool]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            sample_count: 0,
        }
    }
}

impl ButtonInput for ScriptedButton {
    fn is_pressed(&mut self) -> bool {
        self.sample_count += 1;
        self.samples.pop_front().unwrap_or(false)
    }
}

pub struct RecordingIndicator(EventLog);

impl RecordingIndicator {
    pub fn new(log: &EventLog) -> Self {
        Self(log.clone())
    }
}

impl Indicator for RecordingIndicator {
    fn set_active(&mut self, active: bool) {
        self.0.push(Event::Indicator(active));
    }
}

pub struct CapturingConsole(EventLog);

impl CapturingConsole {
    pub fn new(log: &EventLog) -> Self {
        Self(log.clone())
    }
}

impl Console for CapturingConsole {
    fn emit(&mut self, report: &Report) {
        self.0.push(Event::Line(report.to_string()));
    }
}

/// Delay das keine Zeit verbraucht, nur mitschreibt
pub struct RecordingDelay(EventLog);

impl RecordingDelay {
    pub fn new(log: &EventLog) -> Self {
        Self(log.clone())
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::DelayMs(ms));
    }
}
