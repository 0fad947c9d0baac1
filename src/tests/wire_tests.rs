//! Unit tests for the period and task wire codecs.

use crate::domain::{Period, Task, Timestamp, Title};
use crate::wire::{
    FLAG_WIRE_SIZE, PERIOD_WIRE_SIZE, Section, TIMESTAMP_WIRE_SIZE, WireError, decode_period,
    decode_periods, decode_task, decode_task_into, encode_period, encode_periods, encode_task,
    encoded_task_len,
};
use rstest::{fixture, rstest};

fn sample_periods() -> [Period; 2] {
    [
        Period::new(Timestamp::from_secs(1_000), Timestamp::from_secs(101_000)),
        Period::new(Timestamp::from_secs(2_000), Timestamp::from_secs(102_000)),
    ]
}

#[fixture]
fn sample_task() -> Task {
    Task::new(
        Title::new("Title").expect("valid title"),
        sample_periods(),
        true,
    )
}

// ============================================================================
// Period codec
// ============================================================================

#[rstest]
fn period_round_trips() {
    let period = Period::new(Timestamp::from_secs(-5), Timestamp::from_secs(7));
    let mut buffer = [0u8; PERIOD_WIRE_SIZE];

    let written = encode_period(&period, &mut buffer).expect("fits exactly");
    assert_eq!(written, PERIOD_WIRE_SIZE);
    assert_eq!(decode_period(&buffer).expect("well formed"), period);
}

#[rstest]
fn period_encoding_is_deterministic() {
    let period = Period::new(Timestamp::from_secs(1_000), Timestamp::from_secs(101_000));
    let mut first = [0u8; PERIOD_WIRE_SIZE];
    let mut second = [0u8; PERIOD_WIRE_SIZE];

    encode_period(&period, &mut first).expect("fits");
    encode_period(&period, &mut second).expect("fits");
    assert_eq!(first, second);
}

#[rstest]
fn period_fields_use_native_byte_order() {
    let period = Period::new(Timestamp::from_secs(1_000), Timestamp::from_secs(101_000));
    let mut buffer = [0u8; PERIOD_WIRE_SIZE];
    encode_period(&period, &mut buffer).expect("fits");

    let (start, end) = buffer.split_at(TIMESTAMP_WIRE_SIZE);
    assert_eq!(start, 1_000_i64.to_ne_bytes());
    assert_eq!(end, 101_000_i64.to_ne_bytes());
}

#[rstest]
fn periods_encode_back_to_back_without_padding() {
    let periods = sample_periods();
    let mut buffer = [0u8; 2 * PERIOD_WIRE_SIZE];

    let written = encode_periods(&periods, &mut buffer).expect("fits exactly");
    assert_eq!(written, 2 * PERIOD_WIRE_SIZE);

    let decoded: [Period; 2] = decode_periods(&buffer).expect("well formed");
    assert_eq!(decoded, periods);
}

#[rstest]
fn periods_encode_reports_failing_element_index() {
    let periods = sample_periods();
    // Room for the first period plus half a timestamp of the second.
    let mut buffer = [0u8; PERIOD_WIRE_SIZE + 4];
    let result = encode_periods(&periods, &mut buffer);

    assert_eq!(
        result,
        Err(WireError::DestinationFull {
            section: Section::Period(1),
            needed: TIMESTAMP_WIRE_SIZE,
            remaining: 4,
        })
    );
}

#[rstest]
fn periods_decode_reports_failing_element_index() {
    let buffer = [0u8; PERIOD_WIRE_SIZE + 4];
    let result: Result<[Period; 2], _> = decode_periods(&buffer);

    assert_eq!(
        result,
        Err(WireError::SourceExhausted {
            section: Section::Period(1),
            needed: TIMESTAMP_WIRE_SIZE,
            remaining: 4,
        })
    );
}

// ============================================================================
// Task codec: layout
// ============================================================================

#[rstest]
fn task_encoding_matches_declared_layout(sample_task: Task) {
    let mut buffer = vec![0u8; encoded_task_len(&sample_task)];
    let written = encode_task(&sample_task, &mut buffer).expect("fits exactly");
    assert_eq!(written, buffer.len());

    let (title, rest) = buffer.split_at(6);
    assert_eq!(title, b"Title\0");

    let (periods, flag) = rest.split_at(2 * PERIOD_WIRE_SIZE);
    let expected: Vec<u8> = [1_000_i64, 101_000, 2_000, 102_000]
        .iter()
        .flat_map(|secs| secs.to_ne_bytes())
        .collect();
    assert_eq!(periods, expected);
    assert_eq!(flag, [1]);
}

#[rstest]
fn encoded_task_len_counts_terminator_and_fixed_sections(sample_task: Task) {
    assert_eq!(
        encoded_task_len(&sample_task),
        "Title".len() + 1 + 2 * PERIOD_WIRE_SIZE + FLAG_WIRE_SIZE
    );
}

// ============================================================================
// Task codec: round trips
// ============================================================================

#[rstest]
fn task_round_trips(sample_task: Task) {
    let mut buffer = vec![0u8; encoded_task_len(&sample_task)];
    encode_task(&sample_task, &mut buffer).expect("fits");

    let (decoded, consumed) = decode_task(&buffer).expect("well formed");
    assert_eq!(decoded, sample_task);
    assert_eq!(consumed, buffer.len());
}

#[rstest]
fn empty_title_round_trips() {
    let task = Task::new(Title::new("").expect("valid title"), sample_periods(), false);
    let mut buffer = vec![0u8; encoded_task_len(&task)];
    encode_task(&task, &mut buffer).expect("fits");

    let (decoded, _) = decode_task(&buffer).expect("well formed");
    assert!(decoded.title().is_empty());
    assert_eq!(decoded, task);
}

#[rstest]
fn encode_does_not_mutate_the_source(sample_task: Task) {
    let original = sample_task.clone();
    let mut buffer = vec![0u8; encoded_task_len(&sample_task)];
    encode_task(&sample_task, &mut buffer).expect("fits");
    assert_eq!(sample_task, original);
}

#[rstest]
fn decode_into_replaces_every_destination_field(sample_task: Task) {
    let mut buffer = vec![0u8; encoded_task_len(&sample_task)];
    encode_task(&sample_task, &mut buffer).expect("fits");

    let mut dest = Task::new(
        Title::new("stale destination title").expect("valid title"),
        [Period::new(Timestamp::from_secs(9), Timestamp::from_secs(9)); 2],
        false,
    );
    decode_task_into(&mut dest, &buffer).expect("well formed");
    assert_eq!(dest, sample_task);
}

#[rstest]
fn repeated_decode_into_holds_exactly_the_latest_title() {
    let long = Task::new(
        Title::new("a considerably longer title").expect("valid title"),
        sample_periods(),
        true,
    );
    let short = Task::new(Title::new("ok").expect("valid title"), sample_periods(), true);

    let mut long_buf = vec![0u8; encoded_task_len(&long)];
    encode_task(&long, &mut long_buf).expect("fits");
    let mut short_buf = vec![0u8; encoded_task_len(&short)];
    encode_task(&short, &mut short_buf).expect("fits");

    let mut dest = Task::default();
    decode_task_into(&mut dest, &long_buf).expect("well formed");
    decode_task_into(&mut dest, &short_buf).expect("well formed");

    assert_eq!(dest.title().as_str(), "ok");
    assert_eq!(dest.title().len(), 2);
}

// ============================================================================
// Task codec: failure reporting
// ============================================================================

#[rstest]
fn encode_reports_the_section_that_did_not_fit(sample_task: Task) {
    // Everything but the final flag byte fits.
    let mut buffer = vec![0u8; encoded_task_len(&sample_task) - 1];
    let result = encode_task(&sample_task, &mut buffer);

    assert_eq!(
        result,
        Err(WireError::DestinationFull {
            section: Section::Selected,
            needed: FLAG_WIRE_SIZE,
            remaining: 0,
        })
    );
}

#[rstest]
fn decode_reports_missing_title_terminator() {
    let buffer = b"no terminator here";
    let result = decode_task(buffer);

    assert_eq!(
        result,
        Err(WireError::UnterminatedTitle {
            searched: buffer.len(),
        })
    );
}

#[rstest]
fn decode_reports_exhaustion_inside_the_period_block() {
    let mut buffer = b"A\0".to_vec();
    buffer.extend_from_slice(&[0u8; 4]);
    let result = decode_task(&buffer);

    assert_eq!(
        result,
        Err(WireError::SourceExhausted {
            section: Section::Period(0),
            needed: TIMESTAMP_WIRE_SIZE,
            remaining: 4,
        })
    );
}

#[rstest]
fn decode_reports_missing_flag(sample_task: Task) {
    let mut buffer = vec![0u8; encoded_task_len(&sample_task)];
    encode_task(&sample_task, &mut buffer).expect("fits");
    buffer.truncate(buffer.len() - 1);
    let result = decode_task(&buffer);

    assert_eq!(
        result,
        Err(WireError::SourceExhausted {
            section: Section::Selected,
            needed: FLAG_WIRE_SIZE,
            remaining: 0,
        })
    );
}

#[rstest]
fn decode_rejects_non_utf8_title_bytes() {
    let mut buffer = vec![0xFF, 0xFE, 0x00];
    buffer.extend_from_slice(&[0u8; 2 * PERIOD_WIRE_SIZE + FLAG_WIRE_SIZE]);
    let result = decode_task(&buffer);

    assert!(matches!(result, Err(WireError::TitleNotUtf8(_))));
}

#[rstest]
fn failed_decode_leaves_partial_state_without_rollback() {
    // Title decodes, the period block does not; the new title must already
    // be in place while the rest of the destination keeps its old values.
    let mut dest = Task::new(
        Title::new("old").expect("valid title"),
        [Period::new(Timestamp::from_secs(9), Timestamp::from_secs(9)); 2],
        true,
    );
    let buffer = b"new\0";
    let result = decode_task_into(&mut dest, buffer);

    assert!(result.is_err());
    assert_eq!(dest.title().as_str(), "new");
    assert!(dest.selected());
}

#[rstest]
fn nonzero_flag_bytes_decode_as_selected(sample_task: Task) {
    let mut buffer = vec![0u8; encoded_task_len(&sample_task)];
    encode_task(&sample_task, &mut buffer).expect("fits");
    if let Some(flag) = buffer.last_mut() {
        *flag = 0x7F;
    }

    let (decoded, _) = decode_task(&buffer).expect("well formed");
    assert!(decoded.selected());
}
