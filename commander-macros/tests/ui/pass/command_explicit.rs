use commander::command;
use commander::command::Command;

#[command(output = Vec<String>, name = "tags.list")]
#[derive(Clone, Default)]
struct ListTags {
    prefix: Option<String>,
}

#[command(output = Option<u32>, name = "user.find")]
struct FindUser {
    email: String,
}

fn main() {
    let cmd = ListTags::default();
    let _ = format!("{:?}", cmd.clone());
    assert!(cmd.prefix.is_none());
    assert_eq!(ListTags::NAME, "tags.list");

    let find = FindUser { email: "a@b.c".into() };
    assert_eq!(find.email, "a@b.c");
    assert_eq!(FindUser::NAME, "user.find");
    let none: <FindUser as Command>::Output = None;
    assert!(none.is_none());
}
