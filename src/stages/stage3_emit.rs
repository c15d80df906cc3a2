use tracing::debug;

use crate::codegen::{escape_block, escape_scalar, EmitTarget};
use crate::models::{ArticleRecord, AssembleError};

/// Execute Stage 3: serialize resolved records into the module source text
///
/// The whole module is built in memory and returned; callers write it to
/// disk only on success. A record missing a required field aborts emission
/// with an error naming the slug and field.
pub fn execute_stage3(
    records: &[ArticleRecord],
    target: &EmitTarget,
) -> Result<String, AssembleError> {
    if records.is_empty() {
        return Err(AssembleError::EmptyOrder);
    }

    let mut out = String::new();
    push_header(&mut out, target);
    for record in records {
        debug!("Emitting record '{}'", record.slug);
        push_record(&mut out, record, target)?;
    }
    out.push_str("}\n");

    Ok(out)
}

/// Module header with the exported constant declaration
fn push_header(out: &mut String, target: &EmitTarget) {
    if !target.type_annotation {
        out.push_str(&format!("export const {} = {{\n", target.const_name));
        return;
    }

    let f = &target.fields;
    let i = &target.indent;
    out.push_str(&format!(
        "export const {}: Record<string, {{\n",
        target.const_name
    ));
    out.push_str(&format!("{i}{}: string\n", f.title));
    out.push_str(&format!("{i}{}: string\n", f.excerpt));
    out.push_str(&format!("{i}{}: string[]\n", f.content));
    out.push_str(&format!("{i}{}: string\n", f.image));
    out.push_str(&format!("{i}{}: string\n", f.author));
    out.push_str(&format!("{i}{}?: string\n", f.author_bio));
    out.push_str(&format!("{i}{}: string\n", f.date));
    out.push_str(&format!("{i}{}?: string\n", f.updated_date));
    out.push_str(&format!("{i}{}: string\n", f.read_time));
    out.push_str(&format!("{i}{}: string\n", f.category));
    out.push_str(&format!("{i}{}: string[]\n", f.tags));
    out.push_str(&format!(
        "{i}{}?: {{ {}: string; {}: string }}[]\n",
        f.faq, f.question, f.answer
    ));
    out.push_str("}> = {\n");
}

/// One record literal, fields in the fixed emission order
fn push_record(
    out: &mut String,
    record: &ArticleRecord,
    target: &EmitTarget,
) -> Result<(), AssembleError> {
    let f = &target.fields;
    let q = target.scalar_quote;
    let bq = target.block_quote;
    let i1 = &target.indent;
    let i2 = target.indent.repeat(2);
    let i3 = target.indent.repeat(3);

    let slug = record.slug.as_str();
    let title = require(&record.title, &f.title, slug)?;
    let excerpt = require(&record.excerpt, &f.excerpt, slug)?;
    let content = record
        .content
        .as_ref()
        .ok_or_else(|| AssembleError::missing_field(slug, f.content.as_str()))?;
    let image = require(&record.image, &f.image, slug)?;
    let author = require(&record.author, &f.author, slug)?;
    let date = require(&record.date, &f.date, slug)?;
    let read_time = require(&record.read_time, &f.read_time, slug)?;
    let category = require(&record.category, &f.category, slug)?;
    let tags = record
        .tags
        .as_ref()
        .ok_or_else(|| AssembleError::missing_field(slug, f.tags.as_str()))?;

    out.push_str(&format!("{i1}{q}{}{q}: {{\n", escape_scalar(slug, q)));
    out.push_str(&format!(
        "{i2}{}: {q}{}{q},\n",
        f.title,
        escape_scalar(title, q)
    ));
    out.push_str(&format!(
        "{i2}{}: {q}{}{q},\n",
        f.excerpt,
        escape_scalar(excerpt, q)
    ));

    out.push_str(&format!("{i2}{}: [\n", f.content));
    for block in content {
        out.push_str(&format!("{i3}{bq}{}{bq},\n", escape_block(block, bq)));
    }
    out.push_str(&format!("{i2}],\n"));

    out.push_str(&format!(
        "{i2}{}: {q}{}{q},\n",
        f.image,
        escape_scalar(image, q)
    ));
    out.push_str(&format!(
        "{i2}{}: {q}{}{q},\n",
        f.author,
        escape_scalar(author, q)
    ));
    if let Some(bio) = &record.author_bio {
        out.push_str(&format!(
            "{i2}{}: {q}{}{q},\n",
            f.author_bio,
            escape_scalar(bio, q)
        ));
    }
    out.push_str(&format!(
        "{i2}{}: {q}{}{q},\n",
        f.date,
        escape_scalar(date, q)
    ));
    if let Some(updated) = &record.updated_date {
        out.push_str(&format!(
            "{i2}{}: {q}{}{q},\n",
            f.updated_date,
            escape_scalar(updated, q)
        ));
    }
    out.push_str(&format!(
        "{i2}{}: {q}{}{q},\n",
        f.read_time,
        escape_scalar(read_time, q)
    ));
    out.push_str(&format!(
        "{i2}{}: {q}{}{q},\n",
        f.category,
        escape_scalar(category, q)
    ));

    let tag_list = tags
        .iter()
        .map(|t| format!("{q}{}{q}", escape_scalar(t, q)))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("{i2}{}: [{}],\n", f.tags, tag_list));

    // Empty FAQ is emitted identically to absent
    if let Some(faq) = &record.faq {
        if !faq.is_empty() {
            out.push_str(&format!("{i2}{}: [\n", f.faq));
            for entry in faq {
                out.push_str(&format!(
                    "{i3}{{ {}: {q}{}{q}, {}: {q}{}{q} }},\n",
                    f.question,
                    escape_scalar(&entry.question, q),
                    f.answer,
                    escape_scalar(&entry.answer, q)
                ));
            }
            out.push_str(&format!("{i2}],\n"));
        }
    }

    out.push_str(&format!("{i1}}},\n"));
    Ok(())
}

fn require<'a>(
    field: &'a Option<String>,
    name: &str,
    slug: &str,
) -> Result<&'a str, AssembleError> {
    field
        .as_deref()
        .ok_or_else(|| AssembleError::missing_field(slug, name))
}
