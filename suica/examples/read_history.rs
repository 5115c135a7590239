//! Poll for a card and dump its transaction history.
//!
//! This example runs against a pre-seeded MockTransport so it works
//! without hardware; swap in a real `Transport` implementation to run it
//! against a reader.

use std::time::Duration;

use suica::test_support;
use suica::transport::Transport;
use suica::types::SystemCode;
use suica::Reader;

fn seeded_transport() -> Box<dyn Transport> {
    let frames = vec![
        test_support::polling_frame(),
        test_support::read_response_frame(&test_support::history_block(25, 2023, 11, 2, 2000, 1)),
        test_support::read_response_frame(&test_support::history_block(22, 2024, 3, 15, 1520, 2)),
        test_support::read_response_frame(&test_support::history_block(200, 2024, 3, 16, 1400, 3)),
        test_support::read_response_frame(&test_support::sentinel_block()),
    ];
    test_support::boxed_mock_with_responses(frames)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let reader = Reader::new_with_transport(seeded_transport());
    let mut reader = reader.initialize()?;

    println!("Waiting for card...");
    let mut session = reader.poll(SystemCode::SUICA, Duration::from_secs(30))?;
    println!("Card selected: idm={}", session.idm().to_hex());

    let mut count = 0usize;
    for tx in session.history() {
        let tx = tx?;
        println!("{}", tx);
        count += 1;
    }

    println!("Read {} transactions", count);
    Ok(())
}
