use agent_hooks_core::doctor::requirements_for;
use agent_hooks_core::{Catalog, Result, Technology};
use anyhow::bail;

pub fn run(name: &str) -> Result<()> {
    let catalog = Catalog::builtin();
    let name = name.to_lowercase();

    if let Ok(technology) = name.parse::<Technology>() {
        if let Some(rule) = catalog.rule(technology) {
            println!("Name: {technology}");
            println!("Type: Technology");
            println!("Description: {}", rule.desc);
            println!("File patterns: {}", rule.files.join(", "));
            let tools: Vec<String> = requirements_for(&catalog.requirements, technology)
                .iter()
                .map(|req| format!("{} ({})", req.tool, required_label(req.required)))
                .collect();
            if !tools.is_empty() {
                println!("Tools: {}", tools.join(", "));
            }
            println!("URL: {}", rule.url);
            return Ok(());
        }
    }

    if let Some(tool) = catalog.tools.iter().find(|t| t.name.to_lowercase() == name) {
        println!("Name: {}", tool.name);
        println!("Type: Tool");
        match tool.command {
            Some(command) => println!("Command: {command}"),
            None => println!("Command: (meta-tool)"),
        }
        let used_by: Vec<String> = catalog
            .requirements
            .iter()
            .filter(|req| req.tool == tool.name)
            .map(|req| format!("{} ({})", req.technology, required_label(req.required)))
            .collect();
        if catalog.core_tools.contains(&tool.name) {
            println!("Required: Yes (core tool)");
        }
        if !used_by.is_empty() {
            println!("Used by: {}", used_by.join(", "));
        }
        println!("URL: {}", tool.url);
        return Ok(());
    }

    bail!("unknown technology or tool: {name}")
}

fn required_label(required: bool) -> &'static str {
    if required { "required" } else { "optional" }
}
