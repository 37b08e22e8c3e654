//! Integration tests for the serialized stream event loop
//!
//! Drives a coordinator through the same funnel production uses: one
//! ordered mpsc queue into `run_event_loop`, with the real control ack
//! channel on the far side.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serial_test::serial;
use tokio_test::assert_ok;
use tokio::sync::mpsc;
use tokio::time::timeout;

use auralink_stream_core::{
    control_ack_channel, CallMonitor, CodecState, ControlAck, Initiator, OffloadIssuer, PathDriver,
    PeerAddr, Role, SignalingSession, SourceDriver, StartOutcome, StartSignal,
    StreamEventCoordinator, StreamEvent, StreamOutcome, StreamStatus,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn peer() -> PeerAddr {
    PeerAddr::new([0x00, 0x1b, 0xdc, 0x08, 0x15, 0x47])
}

#[derive(Default)]
struct TestSession {
    offload_enabled: AtomicBool,
    started_ready: AtomicBool,
    disconnects: Mutex<Vec<PeerAddr>>,
}

impl SignalingSession for TestSession {
    fn role(&self) -> Role {
        Role::Source
    }

    fn offload_enabled(&self) -> bool {
        self.offload_enabled.load(Ordering::SeqCst)
    }

    fn stream_started_ready(&self) -> bool {
        self.started_ready.load(Ordering::SeqCst)
    }

    fn disconnect(&self, peer: PeerAddr) {
        self.disconnects.lock().unwrap().push(peer);
    }
}

#[derive(Default)]
struct TestCalls;

impl CallMonitor for TestCalls {
    fn call_active(&self) -> bool {
        false
    }
}

#[derive(Default)]
struct TestOffload {
    start_commands: AtomicUsize,
}

impl OffloadIssuer for TestOffload {
    fn issue_start(&self) {
        self.start_commands.fetch_add(1, Ordering::SeqCst);
    }

    fn start_completed(&self, _ack: ControlAck) {}

    fn stop_completed(&self, _status: StreamStatus) {}

    fn suspend_completed(&self, _status: StreamStatus) {}
}

#[derive(Default)]
struct TestDriver {
    idles: AtomicUsize,
}

impl PathDriver for TestDriver {
    fn on_idle(&self) {
        self.idles.fetch_add(1, Ordering::SeqCst);
    }

    fn on_stopped(&self, _outcome: Option<StreamOutcome>) {}

    fn on_suspended(&self, _outcome: Option<StreamOutcome>) {}

    fn debug_dump(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(w, "driver")
    }
}

impl SourceDriver for TestDriver {
    fn setup_codec(&self, _peer: PeerAddr) {}
}

struct Harness {
    event_tx: mpsc::Sender<StreamEvent>,
    ack_rx: mpsc::UnboundedReceiver<ControlAck>,
    session: Arc<TestSession>,
    source: Arc<TestDriver>,
    loop_handle: tokio::task::JoinHandle<()>,
}

struct TestCodec;

impl CodecState for TestCodec {
    fn debug_dump(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(w, "codec")
    }
}

fn spawn_harness() -> Harness {
    let session = Arc::new(TestSession::default());
    let source = Arc::new(TestDriver::default());
    let (acks, ack_rx) = control_ack_channel();

    let coordinator = Arc::new(
        StreamEventCoordinator::builder()
            .session(session.clone())
            .calls(Arc::new(TestCalls))
            .offload(Arc::new(TestOffload::default()))
            .source(source.clone())
            .sink(Arc::new(TestDriver::default()))
            .codec(Arc::new(TestCodec))
            .ack_channel(Arc::new(acks))
            .build()
            .unwrap(),
    );

    let (event_tx, event_rx) = mpsc::channel(16);
    let loop_handle = tokio::spawn(coordinator.run_event_loop(event_rx));

    Harness {
        event_tx,
        ack_rx,
        session,
        source,
        loop_handle,
    }
}

async fn recv_ack(h: &mut Harness) -> ControlAck {
    timeout(Duration::from_secs(1), h.ack_rx.recv())
        .await
        .expect("timed out waiting for ack")
        .expect("ack channel closed")
}

#[tokio::test]
#[serial]
async fn local_start_request_is_acked_through_the_loop() {
    init_tracing();
    let mut h = spawn_harness();

    let send = h
        .event_tx
        .send(StreamEvent::Started {
            peer: peer(),
            signal: StartSignal::RequestOnly,
            pending_start: true,
        })
        .await;
    tokio_test::assert_ok!(send);

    assert_eq!(recv_ack(&mut h).await, ControlAck::Success);
}

#[tokio::test]
#[serial]
async fn events_are_processed_in_order() {
    init_tracing();
    let mut h = spawn_harness();

    // A failed local start followed by a successful request: the acks
    // must come back in the same order the events went in.
    let failed = StartSignal::Confirmed(StartOutcome::new(
        StreamStatus::Failed,
        false,
        Initiator::Local,
    ));
    h.event_tx
        .send(StreamEvent::Started {
            peer: peer(),
            signal: failed,
            pending_start: true,
        })
        .await
        .unwrap();
    h.event_tx
        .send(StreamEvent::Started {
            peer: peer(),
            signal: StartSignal::RequestOnly,
            pending_start: true,
        })
        .await
        .unwrap();

    assert_eq!(recv_ack(&mut h).await, ControlAck::Failure);
    assert_eq!(recv_ack(&mut h).await, ControlAck::Success);
}

#[tokio::test]
#[serial]
async fn offload_completion_outside_offload_mode_acks_on_the_channel() {
    init_tracing();
    let mut h = spawn_harness();

    h.event_tx
        .send(StreamEvent::OffloadStarted {
            peer: peer(),
            status: StreamStatus::NoResources,
        })
        .await
        .unwrap();

    assert_eq!(recv_ack(&mut h).await, ControlAck::Unsupported);
}

#[tokio::test]
#[serial]
async fn offload_rejection_disconnects_a_started_stream() {
    init_tracing();
    let h = spawn_harness();
    h.session.offload_enabled.store(true, Ordering::SeqCst);
    h.session.started_ready.store(true, Ordering::SeqCst);

    h.event_tx
        .send(StreamEvent::OffloadStarted {
            peer: peer(),
            status: StreamStatus::Failed,
        })
        .await
        .unwrap();
    // An idle event afterwards proves the loop is still alive; with the
    // role fixed to Source it always reaches the source driver.
    h.event_tx.send(StreamEvent::Idle).await.unwrap();

    timeout(Duration::from_secs(1), async {
        while h.source.idles.load(Ordering::SeqCst) == 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("idle event never reached the source driver");

    assert_eq!(h.session.disconnects.lock().unwrap().as_slice(), &[peer()]);
}

#[tokio::test]
#[serial]
async fn loop_ends_when_the_event_queue_closes() {
    init_tracing();
    let h = spawn_harness();

    drop(h.event_tx);

    tokio_test::assert_ok!(timeout(Duration::from_secs(1), h.loop_handle).await.unwrap());
}
