//
//  employes-client
//  cli/leave.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Leave commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::api::EmployesApi;
use crate::entity::actions::{Getable, Listable};
use crate::entity::Resource;
use crate::util::{parse_key_value, to_params};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct LeaveCommand {
    #[command(subcommand)]
    pub command: LeaveSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LeaveSubcommand {
    /// List leave records
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one leave record
    #[command(visible_alias = "view")]
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Query parameter as KEY=VALUE (repeatable)
    #[arg(long = "param", short = 'p', value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, Value)>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Leave id
    pub id: String,
}

impl LeaveCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            LeaveSubcommand::List(args) => self.list(args, global).await,
            LeaveSubcommand::Get(args) => self.get(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let connection = global.connection()?;
        let api = EmployesApi::new(&connection);

        let leaves = api.leave().list(&to_params(&args.params)).await?;
        let records: Vec<_> = leaves.iter().map(|l| l.attributes()).collect();
        global.output().write_records(&records)
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let connection = global.connection()?;
        let api = EmployesApi::new(&connection);

        let leave = api.leave().get(&args.id).await?;
        global.output().write_record(leave.attributes())
    }
}
