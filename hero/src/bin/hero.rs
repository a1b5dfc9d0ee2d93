// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use folio_hero::{CLIArg, run_app};
use folio_typewriter::CommonResult;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();
    run_app(cli_arg).await
}
