//
//  employes-client
//  cli/employee.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Employee commands
//!
//! Lists, shows, creates, updates and deletes the employees of the configured
//! administration. Attributes are passed as repeated `--set KEY=VALUE`
//! arguments; keys outside the employee's fillable list are reported and
//! skipped.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::{json, Value};

use crate::api::EmployesApi;
use crate::entity::actions::{Deletable, Getable, Listable, Storable, UpdateOutcome};
use crate::entity::Resource;
use crate::output::OutputWriter;
use crate::util::{parse_key_value, to_params};

use super::{apply_attributes, GlobalOptions};

#[derive(Args, Debug)]
pub struct EmployeeCommand {
    #[command(subcommand)]
    pub command: EmployeeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EmployeeSubcommand {
    /// List employees
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one employee
    #[command(visible_alias = "view")]
    Get(GetArgs),

    /// Create an employee
    Create(CreateArgs),

    /// Update an employee
    #[command(visible_alias = "edit")]
    Update(UpdateArgs),

    /// Delete an employee
    Delete(GetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Query parameter as KEY=VALUE (repeatable)
    #[arg(long = "param", short = 'p', value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, Value)>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Employee id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Attribute as KEY=VALUE (repeatable)
    #[arg(long = "set", short = 's', value_name = "KEY=VALUE", value_parser = parse_key_value, required = true)]
    pub attributes: Vec<(String, Value)>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Employee id
    pub id: String,

    /// Attribute as KEY=VALUE (repeatable)
    #[arg(long = "set", short = 's', value_name = "KEY=VALUE", value_parser = parse_key_value, required = true)]
    pub attributes: Vec<(String, Value)>,
}

impl EmployeeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            EmployeeSubcommand::List(args) => self.list(args, global).await,
            EmployeeSubcommand::Get(args) => self.get(args, global).await,
            EmployeeSubcommand::Create(args) => self.create(args, global).await,
            EmployeeSubcommand::Update(args) => self.update(args, global).await,
            EmployeeSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let connection = global.connection()?;
        let api = EmployesApi::new(&connection);

        let employees = api.employee().list(&to_params(&args.params)).await?;
        let records: Vec<_> = employees.iter().map(|e| e.attributes()).collect();
        global.output().write_records(&records)
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let connection = global.connection()?;
        let api = EmployesApi::new(&connection);

        let employee = api.employee().get(&args.id).await?;
        global.output().write_record(employee.attributes())
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let connection = global.connection()?;
        let api = EmployesApi::new(&connection);
        let output = global.output();

        let mut employee = api.employee();
        report_ignored(&output, apply_attributes(&mut employee, &args.attributes));
        if employee.fillables().is_empty() {
            bail!("No fillable attributes given; nothing to create");
        }

        let created = employee.create().await?;
        output.write_record(created.attributes())?;
        output.write_success(&format!(
            "Created employee {}",
            created.entity().id().unwrap_or_default()
        ));
        Ok(())
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let connection = global.connection()?;
        let api = EmployesApi::new(&connection);
        let output = global.output();

        let mut employee = api.employee_with(&identity(&args.id));
        report_ignored(&output, apply_attributes(&mut employee, &args.attributes));

        match employee.update().await? {
            UpdateOutcome::Acknowledged => {}
            UpdateOutcome::Updated(updated) => output.write_record(updated.attributes())?,
        }
        output.write_success(&format!("Updated employee {}", args.id));
        Ok(())
    }

    async fn delete(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let connection = global.connection()?;
        let api = EmployesApi::new(&connection);
        let output = global.output();

        let result = api.employee_with(&identity(&args.id)).delete().await?;
        output.write_value(&result)?;
        output.write_success(&format!("Deleted employee {}", args.id));
        Ok(())
    }
}

fn identity(id: &str) -> crate::entity::Attributes {
    let mut attributes = crate::entity::Attributes::new();
    attributes.insert("id".to_string(), json!(id));
    attributes
}

fn report_ignored(output: &OutputWriter, ignored: Vec<String>) {
    for key in ignored {
        output.write_warning(&format!("Ignoring '{key}': not a writable employee attribute"));
    }
}
