use std::error::Error;
use std::fs::File;

use accordion::{Accordion, AccordionConfig};
use ariadom::{Document, Element};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn Error>> {
    // Set up file logging
    let log_file = File::create("accordion.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new(ui());
    let container = doc
        .get_element_by_id("accordion")
        .ok_or("missing #accordion")?;
    let config = AccordionConfig::from_json(r#"{"modifier": "--open"}"#)?;
    let accordion = Accordion::create(&mut doc, container, &config)?;

    println!("active class: {}\n", accordion.active_class());
    println!("initial\n{}", doc.render());

    for (step, button) in [
        "accordion-button-1",
        "accordion-button-2",
        "accordion-button-2",
    ]
    .into_iter()
    .enumerate()
    {
        doc.click_by_id(button);
        println!(
            "step {}: click {button} -> open item {:?}\n{}",
            step + 1,
            accordion.expanded_index(&doc),
            doc.render()
        );
    }

    Ok(())
}

fn ui() -> Element {
    Element::div()
        .id("accordion")
        .children((1..=3).map(|n| {
            Element::section()
                .class("collapse")
                .child(
                    Element::heading(4).id(format!("accordion-title-{n}")).child(
                        Element::button()
                            .id(format!("accordion-button-{n}"))
                            .attr("aria-expanded", "false")
                            .attr("aria-controls", format!("accordion-body-{n}"))
                            .text(format!("Header {n}")),
                    ),
                )
                .child(
                    Element::div()
                        .id(format!("accordion-body-{n}"))
                        .attr("aria-hidden", "true")
                        .attr("aria-labelledby", format!("accordion-button-{n}"))
                        .text(format!("Content {n}")),
                )
        }))
}
