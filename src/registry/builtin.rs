//! Built-in template table for the CC2420 radio pipeline.
//!
//! Thread layout of the modeled system (second field of every line):
//! - 0: scheduler task loop and its services (`receiveDone_task`, `sendTask`)
//! - 1: `InterruptFIFOP.fired`, which starts the length read
//! - 2..=6: the SPI read-done handlers (length, FCF, payload, ack length, ack payload)
//! - 7: `sendDone`
//!
//! A `PEUSTART` line carries the number of cycles before the matching
//! handler fires (fifth field) followed by the normal. Those delays are
//! fixed per operation and are part of the template text.
//!
//! Thread 0 can be interrupted anywhere and no trace point marks where, so
//! the instrumented scheduler emits `CONTEXT_SWITCH_CODE` ahead of its
//! events. Its `CTXSW` line lets the analysis switch back to thread 0
//! regardless of where the interruption happened.

use super::TemplateSource;
use crate::utils::config::TEMPLATE_SLOTS;

/// Event code whose template is the thread-0 `CTXSW` marker
pub const CONTEXT_SWITCH_CODE: i64 = 33;

const EMPTY: &[&str] = &[];

const FIFOP_IRQ_ENTRY: &[&str] = &["HIRQENTRY 0 1 [CPU_CYCLES] 1 0 0 interruptfifop_fired s"];

const FIFOP_READ_LENGTH: &[&str] = &[
    "TEMPSYNCH 0 1 [CPU_CYCLES] 1 0 1 (TEMP) readDoneLength",
    "PEUSTART 0 1 [CPU_CYCLES] 1 2 0 (TEMP) s",
    "WAITCOMPL 0 1 [CPU_CYCLES] 1 0 1 (TEMP) readDoneLength",
];

// Same read, but the chip needs longer before the handler fires
const FIFOP_READ_LENGTH_SLOW: &[&str] = &[
    "TEMPSYNCH 0 1 [CPU_CYCLES] 1 0 1 (TEMP) readDoneLength",
    "PEUSTART 0 1 [CPU_CYCLES] 1 5 0 (TEMP) s",
    "WAITCOMPL 0 1 [CPU_CYCLES] 1 0 1 (TEMP) readDoneLength",
];

const FIFOP_IRQ_EXIT: &[&str] = &["HIRQEXIT 0 1 [CPU_CYCLES] 1 0 0 interruptfifop_fired s"];

const READ_LENGTH_ENTRY: &[&str] = &[
    "HIRQENTRY 0 2 [CPU_CYCLES] 2 0 0 readDoneLength s",
    "COMPL 0 2 [CPU_CYCLES] 1 0 0 (TEMP) readDoneLength",
];

const READ_LENGTH_START_FCF: &[&str] = &[
    "TEMPSYNCH 0 2 [CPU_CYCLES] 2 0 1 (TEMP) readDoneFcf",
    "PEUSTART 0 2 [CPU_CYCLES] 2 3 0 (TEMP) s",
    "WAITCOMPL 0 2 [CPU_CYCLES] 2 0 1 (TEMP) readDoneFcf",
];

const READ_LENGTH_EXIT: &[&str] = &["HIRQEXIT 0 2 [CPU_CYCLES] 2 0 0 readDoneLength s"];

const READ_FCF_ENTRY: &[&str] = &[
    "HIRQENTRY 0 3 [CPU_CYCLES] 3 0 0 readDoneFcf s",
    "COMPL 0 3 [CPU_CYCLES] 1 0 0 (TEMP) readDoneFcf",
];

const READ_FCF_START_PAYLOAD: &[&str] = &[
    "TEMPSYNCH 0 3 [CPU_CYCLES] 3 0 1 (TEMP) readDonePayload",
    "PEUSTART 0 3 [CPU_CYCLES] 3 4 0 (TEMP) s",
    "WAITCOMPL 0 3 [CPU_CYCLES] 3 0 1 (TEMP) readDonePayload",
];

const READ_FCF_EXIT: &[&str] = &["HIRQEXIT 0 3 [CPU_CYCLES] 3 0 0 readDoneFcf s"];

const READ_PAYLOAD_ENTRY: &[&str] = &[
    "HIRQENTRY 0 4 [CPU_CYCLES] 4 0 0 readDonePayload s",
    "COMPL 0 4 [CPU_CYCLES] 1 0 0 (TEMP) readDonePayload",
];

// Posts receiveDone_task onto softirq::rx before leaving the handler
const READ_PAYLOAD_EXIT: &[&str] = &[
    "SRVQUEUE 0 4 [CPU_CYCLES] 0 2 0 receiveDone_task 0",
    "HIRQEXIT 0 4 [CPU_CYCLES] 4 0 0 readDonePayload s",
];

const RECEIVE_TASK_QUEUE_CHECK: &[&str] = &["QUEUECOND 0 0 [CPU_CYCLES] 0 0 0 receiveDone_task s"];

const RECEIVE_TASK_ENQUEUE_PACKET: &[&str] =
    &["PKTQUEUE 0 0 [CPU_CYCLES] 0 1 0 receiveDone_task s"];

const SEND_TASK_QUEUE_CHECK: &[&str] = &["QUEUECOND 0 0 [CPU_CYCLES] 0 0 0 sendTask s"];

const SEND_TASK_DEQUEUE_PACKET: &[&str] = &["PKTQUEUE 0 0 [CPU_CYCLES] 1 1 0 sendTask s"];

const SEND_TASK_START_TX: &[&str] = &[
    "TEMPSYNCH 0 0 [CPU_CYCLES] 0 0 1 (TEMP) sendDone",
    "PEUSTART 0 0 [CPU_CYCLES] 0 7 0 (TEMP) s",
    "WAITCOMPL 0 0 [CPU_CYCLES] 0 0 1 (TEMP) sendDone",
];

const SEND_DONE_IRQ: &[&str] = &[
    "HIRQENTRY 0 7 [CPU_CYCLES] 7 0 0 sendDone s",
    "COMPL 0 7 [CPU_CYCLES] 1 0 0 (TEMP) sendDone",
    "SRVQUEUE 0 7 [CPU_CYCLES] 0 2 0 sendDone_task s",
    "HIRQEXIT 0 7 [CPU_CYCLES] 7 0 0 sendDone s",
];

const READ_ACK_LENGTH_ENTRY: &[&str] = &[
    "HIRQENTRY 0 5 [CPU_CYCLES] 5 0 0 readDoneAckLength s",
    "COMPL 0 5 [CPU_CYCLES] 1 0 0 (TEMP) readDoneAckLength",
];

const READ_ACK_LENGTH_START_PAYLOAD: &[&str] = &[
    "TEMPSYNCH 0 5 [CPU_CYCLES] 1 0 1 (TEMP) readDoneAck",
    "PEUSTART 0 5 [CPU_CYCLES] 5 6 0 (TEMP) s",
    "WAITCOMPL 0 5 [CPU_CYCLES] 1 0 1 (TEMP) readDoneAckLength",
];

const READ_ACK_LENGTH_EXIT: &[&str] = &["HIRQEXIT 0 5 [CPU_CYCLES] 5 0 0 readDoneAckLength s"];

const READ_ACK_PAYLOAD_ENTRY: &[&str] = &[
    "HIRQENTRY 0 0 [CPU_CYCLES] 6 0 0 readDoneAckPayload s",
    "COMPL 0 6 [CPU_CYCLES] 1 0 0 (TEMP) readDoneAckPayload",
];

const READ_ACK_PAYLOAD_EXIT: &[&str] = &["HIRQEXIT 0 6 [CPU_CYCLES] 6 0 0 readDoneAckPayload s"];

const CONTEXT_SWITCH: &[&str] = &["CTXSW 0 0 [CPU_CYCLES] 0 0 0 0 s"];

// The scheduler reports service start/stop, so services don't trace their own.
// The service name isn't known from the record, hence SERVICE_PLACEHOLDER.
const SERVICE_EXIT: &[&str] = &[
    "SRVEXIT 0 0 [CPU_CYCLES] 0 0 0 SERVICE_PLACEHOLDER s",
    "LOOPRSTART 0 0 [CPU_CYCLES] 0 0 0 2 task_loop",
];

// Dequeue (1) a service from queue 2, softirq::rx
const SERVICE_DEQUEUE: &[&str] = &["SRVQUEUE 0 0 [CPU_CYCLES] 1 2 0 SERVICE_PLACEHOLDER s"];

const SEND_TASK_ENQUEUE_TX: &[&str] = &["PKTQUEUE 0 0 [CPU_CYCLES] 0 3 0 sendTask s"];

const RECEIVE_TASK_POST_SEND: &[&str] = &["SRVQUEUE 0 0 [CPU_CYCLES] 0 2 0 sendTask 0"];

const SEND_TASK_QUEUE_EMPTY: &[&str] = &["QUEUECOND 0 0 [CPU_CYCLES] 0 0 0 sendTask empty"];

const SEND_TASK_QUEUE_NOT_EMPTY: &[&str] = &["QUEUECOND 0 0 [CPU_CYCLES] 0 0 0 sendTask notempty"];

/// Template table indexed by event code.
///
/// Slots left `EMPTY` are reserved or suppressed events: task starts that
/// the scheduler records through `SERVICE_DEQUEUE`, service exits folded
/// into `SERVICE_EXIT`, the ack-payload sync that the hardware handler
/// already covers, and task-loop bookkeeping the analysis doesn't model.
static TEMPLATES: [&[&str]; TEMPLATE_SLOTS] = {
    let mut table = [EMPTY; TEMPLATE_SLOTS];
    table[0] = FIFOP_IRQ_ENTRY;
    table[1] = FIFOP_READ_LENGTH;
    table[2] = FIFOP_READ_LENGTH_SLOW;
    table[3] = FIFOP_IRQ_EXIT;
    table[4] = READ_LENGTH_ENTRY;
    table[5] = READ_LENGTH_START_FCF;
    table[6] = READ_LENGTH_EXIT;
    table[7] = READ_FCF_ENTRY;
    table[8] = READ_FCF_START_PAYLOAD;
    table[9] = READ_FCF_EXIT;
    table[10] = READ_PAYLOAD_ENTRY;
    table[11] = READ_PAYLOAD_EXIT;
    table[13] = RECEIVE_TASK_QUEUE_CHECK;
    table[14] = RECEIVE_TASK_QUEUE_CHECK;
    table[15] = RECEIVE_TASK_ENQUEUE_PACKET;
    table[18] = SEND_TASK_QUEUE_CHECK;
    table[19] = SEND_TASK_QUEUE_CHECK;
    table[20] = SEND_TASK_DEQUEUE_PACKET;
    table[21] = SEND_TASK_START_TX;
    table[23] = SEND_DONE_IRQ;
    table[24] = READ_ACK_LENGTH_ENTRY;
    table[25] = READ_ACK_LENGTH_START_PAYLOAD;
    table[26] = READ_ACK_LENGTH_EXIT;
    table[29] = READ_ACK_PAYLOAD_ENTRY;
    table[30] = READ_ACK_PAYLOAD_EXIT;
    table[CONTEXT_SWITCH_CODE as usize] = CONTEXT_SWITCH;
    table[38] = SERVICE_EXIT;
    table[39] = SERVICE_DEQUEUE;
    table[40] = SEND_TASK_ENQUEUE_TX;
    table[41] = RECEIVE_TASK_POST_SEND;
    table[71] = SEND_TASK_QUEUE_EMPTY;
    table[91] = SEND_TASK_QUEUE_NOT_EMPTY;
    table
};

/// Look up the template for an event code
///
/// **Public** - main entry point of the built-in registry
///
/// # Arguments
/// * `code` - Event code from the compressed trace (any integer)
///
/// # Returns
/// The template lines for `code`, or an empty slice for undefined,
/// suppressed, negative, or out-of-range codes
pub fn lookup(code: i64) -> &'static [&'static str] {
    usize::try_from(code)
        .ok()
        .and_then(|index| TEMPLATES.get(index))
        .copied()
        .unwrap_or(EMPTY)
}

/// Codes whose template has at least one line, in ascending order
pub fn populated_codes() -> impl Iterator<Item = i64> {
    TEMPLATES
        .iter()
        .enumerate()
        .filter(|(_, lines)| !lines.is_empty())
        .map(|(code, _)| code as i64)
}

/// The built-in table as a `TemplateSource`
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateSource for BuiltinTemplates {
    type Line = &'static str;

    fn lookup(&self, code: i64) -> &[&'static str] {
        lookup(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::CYCLES_PLACEHOLDER;

    #[test]
    fn test_suppressed_codes_are_empty() {
        for code in [12, 16, 17, 22, 27, 28, 31, 32, 34, 35, 36, 37, 42, 47, 48, 90] {
            assert!(lookup(code).is_empty(), "code {} should be empty", code);
        }
    }

    #[test]
    fn test_out_of_range_codes_are_empty() {
        assert!(lookup(-1).is_empty());
        assert!(lookup(TEMPLATE_SLOTS as i64).is_empty());
        assert!(lookup(i64::MAX).is_empty());
        assert!(lookup(i64::MIN).is_empty());
    }

    #[test]
    fn test_every_line_has_one_placeholder() {
        for code in populated_codes() {
            for line in lookup(code) {
                assert_eq!(
                    line.matches(CYCLES_PLACEHOLDER).count(),
                    1,
                    "code {}: {}",
                    code,
                    line
                );
            }
        }
    }

    #[test]
    fn test_context_switch_marker() {
        assert_eq!(lookup(CONTEXT_SWITCH_CODE), ["CTXSW 0 0 [CPU_CYCLES] 0 0 0 0 s"]);
    }

    #[test]
    fn test_populated_codes() {
        let codes: Vec<i64> = populated_codes().collect();
        assert_eq!(codes.len(), 32);
        assert_eq!(codes.first(), Some(&0));
        assert_eq!(codes.last(), Some(&91));
        assert!(!codes.contains(&12));
    }
}
