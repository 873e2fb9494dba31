use commander::command;

#[command]
enum Shape {
    Circle,
}

fn main() {}
