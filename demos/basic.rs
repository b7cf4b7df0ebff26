use snowflake_codec::{deconstruct, Snowflake};

fn main() {
    let generator = Snowflake::new();

    let id1 = generator.generate();
    let id2 = generator.generate();
    let id3 = generator.generate();

    println!("Generated snowflakes:");
    print_id(&id1);
    print_id(&id2);
    print_id(&id3);

    println!("\nKnown snowflake 266241948824764416:");
    print_id("266241948824764416");

    let parts = deconstruct(&id3).unwrap();
    println!("\nBit fields of {id3}:");
    println!("  Timestamp:  {}", parts.timestamp_bits());
    println!("  Worker ID:  {}", parts.worker_bits());
    println!("  Process ID: {}", parts.process_bits());
    println!("  Increment:  {}", parts.increment_bits());

    match deconstruct("not-a-number") {
        Ok(parts) => println!("\nUnexpectedly parsed: {parts}"),
        Err(err) => println!("\nRejected input: {err}"),
    }
}

fn print_id(id: &str) {
    let parts = deconstruct(id).unwrap();
    println!(
        "  ID: {id}, Timestamp: {}, Human date: {}, Worker ID: {}, Process ID: {}, Increment: {}",
        parts.timestamp(),
        parts.date,
        parts.worker_id,
        parts.process_id,
        parts.increment
    );
}
