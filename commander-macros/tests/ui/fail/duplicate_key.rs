use commander::command;

#[command(name = "a", name = "b")]
struct Ping;

fn main() {}
