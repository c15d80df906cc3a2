pub mod codegen;
pub mod io;
pub mod models;
pub mod stages;

pub use codegen::{escape_block, escape_scalar, EmitTarget, FieldNames};
pub use io::{
    parse_articles_file, parse_articles_json, parse_enhancements_file, parse_enhancements_json,
    parse_order, parse_order_file, write_module,
};
pub use models::{ArticleRecord, AssembleError, AssemblyReport, Enhancement, FaqEntry};
pub use stages::{
    execute_stage1, execute_stage2, execute_stage3, merge_article, Stage1Result, Stage2Result,
};
