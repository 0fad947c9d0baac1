//! Builds a sample task, prints it, round-trips it through the wire codec,
//! and prints the decoded copy.
//!
//! The console is the rendering sink and the ambient clock is the source of
//! the sample timestamps; neither is part of the codec's contract.

#![expect(
    clippy::print_stdout,
    reason = "the demo writes its report to the console"
)]

use mockable::DefaultClock;
use taskwire::domain::{Period, Task, Timestamp, Title, render_task};
use taskwire::wire::{decode_task_into, encode_task, encoded_task_len};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let clock = DefaultClock;
    let now = Timestamp::now(&clock);
    let periods = [
        Period::new(now, now.offset_by(100_000)),
        Period::new(now, now.offset_by(100_000)),
    ];
    let task = Task::new(Title::new("Title")?, periods, true);
    println!("Task:\n{}", render_task(Some(&task)));

    let mut buffer = vec![0u8; encoded_task_len(&task)];
    encode_task(&task, &mut buffer)?;

    let mut decoded = Task::default();
    decode_task_into(&mut decoded, &buffer)?;
    println!("Task:\n{}", render_task(Some(&decoded)));

    Ok(())
}
