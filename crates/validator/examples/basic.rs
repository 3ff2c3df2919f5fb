//! Element-wise validation with a replacement fallback.

use lumber_validator::prelude::*;
use serde_json::json;

fn main() {
    let validator = each(replace(is_number(), 3));
    let input = json!([1, "str", 3]);

    println!("input:     {input}");
    println!("validator: {validator:?}");
    println!("result:    {:?}", validator.validate(&input));
}
