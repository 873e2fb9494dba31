use commander::command::Command;
use commander::{Unit, command};

#[command]
struct Ping;

#[command(debug = false)]
struct Quiet;

impl std::fmt::Debug for Quiet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Quiet(..)")
    }
}

fn unit_output<C: Command<Output = Unit>>(_cmd: &C) -> &'static str {
    C::NAME
}

fn main() {
    assert_eq!(unit_output(&Ping), "Ping");
    let _ = format!("{:?}", Ping); // 默认派生 Debug
    let _ = format!("{:?}", Quiet); // 手写 Debug 可编译说明未自动派生
}
