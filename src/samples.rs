use crate::error::Result;
use crate::ui;
use classifier_flow::{ClassifierConfig, ExampleMessage};
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table,
};

pub fn execute(config: &ClassifierConfig) -> Result<()> {
    if config.examples.is_empty() {
        ui::warning_message("No example messages configured");
        return Ok(());
    }

    ui::section_header("Example Messages");
    println!("{}", examples_table(&config.examples));
    ui::info_message("Try one with: intent-router classify \"<message>\"");
    Ok(())
}

fn examples_table(examples: &[ExampleMessage]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ["#", "Label", "Message", "Expected Intent"]
                .into_iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );

    for (index, example) in examples.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&example.label),
            Cell::new(&example.message),
            Cell::new(example.expected_intent.as_deref().unwrap_or("-")),
        ]);
    }
    table
}
