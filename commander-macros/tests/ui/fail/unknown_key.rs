use commander::command;

#[command(foo = 1)]
struct Ping;

fn main() {}
