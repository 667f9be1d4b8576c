use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

impl Person {
    pub fn new(id: u32, name: &str) -> Self {
        Person {
            id: PersonId(id),
            name: name.to_string(),
        }
    }

    pub fn new_test() -> Self {
        Person::new(1, "Full Name")
    }
}

/// The fixed list served by `GET /api/people`, ids follow source order
pub fn roster() -> Vec<Person> {
    vec![
        Person::new(1, "张三"),
        Person::new(2, "李四"),
        Person::new(3, "王五"),
        Person::new(4, "赵六"),
        Person::new(5, "钱七"),
        Person::new(6, "孙八"),
        Person::new(7, "周九"),
        Person::new(8, "吴十"),
        Person::new(9, "郑十一"),
        Person::new(10, "王十二"),
    ]
}
