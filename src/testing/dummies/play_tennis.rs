use crate::core::dataset::Dataset;
use serde_json::{Map, Value};
use std::io::Cursor;

/// The 14-row PlayTennis table (9 Yes, 5 No) as JSON lines.
pub const PLAY_TENNIS_JSON_LINES: &str = r#"{"Outlook":"Sunny","Temperature":"Hot","Humidity":"High","Wind":"Weak","PlayTennis":"No"}
{"Outlook":"Sunny","Temperature":"Hot","Humidity":"High","Wind":"Strong","PlayTennis":"No"}
{"Outlook":"Overcast","Temperature":"Hot","Humidity":"High","Wind":"Weak","PlayTennis":"Yes"}
{"Outlook":"Rain","Temperature":"Mild","Humidity":"High","Wind":"Weak","PlayTennis":"Yes"}
{"Outlook":"Rain","Temperature":"Cool","Humidity":"Normal","Wind":"Weak","PlayTennis":"Yes"}
{"Outlook":"Rain","Temperature":"Cool","Humidity":"Normal","Wind":"Strong","PlayTennis":"No"}
{"Outlook":"Overcast","Temperature":"Cool","Humidity":"Normal","Wind":"Strong","PlayTennis":"Yes"}
{"Outlook":"Sunny","Temperature":"Mild","Humidity":"High","Wind":"Weak","PlayTennis":"No"}
{"Outlook":"Sunny","Temperature":"Cool","Humidity":"Normal","Wind":"Weak","PlayTennis":"Yes"}
{"Outlook":"Rain","Temperature":"Mild","Humidity":"Normal","Wind":"Weak","PlayTennis":"Yes"}
{"Outlook":"Sunny","Temperature":"Mild","Humidity":"Normal","Wind":"Strong","PlayTennis":"Yes"}
{"Outlook":"Overcast","Temperature":"Mild","Humidity":"High","Wind":"Strong","PlayTennis":"Yes"}
{"Outlook":"Overcast","Temperature":"Hot","Humidity":"Normal","Wind":"Weak","PlayTennis":"Yes"}
{"Outlook":"Rain","Temperature":"Mild","Humidity":"High","Wind":"Strong","PlayTennis":"No"}
"#;

pub fn play_tennis_rows() -> Vec<Map<String, Value>> {
    PLAY_TENNIS_JSON_LINES
        .lines()
        .filter_map(|line| match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        })
        .collect()
}

pub fn play_tennis_dataset() -> Dataset {
    Dataset::from_reader(
        Cursor::new(PLAY_TENNIS_JSON_LINES),
        "play_tennis".to_string(),
        "PlayTennis",
    )
    .expect("fixture parses")
}
