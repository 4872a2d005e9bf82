/*
 * SPDX-FileCopyrightText: Copyright (c) 2021-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// Markdown pages for the command tree, one file per command named after
// its path, e.g. `oasisctl_get_deployment.md`.

use std::path::PathBuf;

use clap::{Arg, Command};
use rpc::cli::{OasisCliError, OasisCliResult};

use super::args::Opts;

/// Writes the pages for `root` and all of its visible subcommands and
/// returns the files written.
pub fn generate(opts: &Opts, mut root: Command) -> OasisCliResult<Vec<PathBuf>> {
    if !opts.output_dir.is_dir() {
        return Err(OasisCliError::GenericError(format!(
            "Output directory '{}' does not exist",
            opts.output_dir.display()
        )));
    }

    // Propagates global options into subcommands.
    root.build();

    let mut written = Vec::new();
    write_tree(&root, &[], opts, &mut written)?;
    tracing::debug!(count = written.len(), "Generated documentation");
    Ok(written)
}

fn write_tree(
    cmd: &Command,
    parents: &[String],
    opts: &Opts,
    written: &mut Vec<PathBuf>,
) -> OasisCliResult<()> {
    if cmd.is_hide_set() || cmd.get_name() == "help" {
        return Ok(());
    }

    let mut path = parents.to_vec();
    path.push(cmd.get_name().to_string());

    let file = opts.output_dir.join(format!("{}.md", base_name(&path)));
    std::fs::write(&file, page(cmd, &path, opts))?;
    written.push(file);

    for sub in cmd.get_subcommands() {
        write_tree(sub, &path, opts, written)?;
    }
    Ok(())
}

fn base_name(path: &[String]) -> String {
    path.join("_")
}

pub fn front_matter(path: &[String]) -> String {
    let command = path.join(" ");
    format!(
        "---\nlayout: default\ndescription: Description of the {command} command\ntitle: {}\n---\n",
        title_case(&command)
    )
}

/// Upper-cases the first letter of every word. Anything but letters, digits
/// and underscores separates words and is kept, so `generate-docs` becomes
/// `Generate-Docs`.
pub fn title_case(text: &str) -> String {
    let mut title = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    title
}

pub fn link(base: &str, opts: &Opts) -> String {
    let ext = if opts.link_file_ext.is_empty() {
        ".md"
    } else {
        opts.link_file_ext.as_str()
    };
    if opts.replace_underscore_with.is_empty() {
        format!("{base}{ext}")
    } else {
        format!("{}{ext}", base.replace('_', &opts.replace_underscore_with))
    }
}

fn page(cmd: &Command, path: &[String], opts: &Opts) -> String {
    let command = path.join(" ");
    let about = cmd.get_about().map(|a| a.to_string()).unwrap_or_default();
    let long_about = cmd
        .get_long_about()
        .map(|a| a.to_string())
        .unwrap_or_else(|| about.clone());

    let usage = if cmd.has_subcommands() {
        "[command]"
    } else {
        "[flags]"
    };

    let mut out = front_matter(path);
    out.push_str(&format!(
        "## {command}\n\n{about}\n\n### Synopsis\n\n{long_about}\n\n"
    ));
    out.push_str(&format!("```\n{command} {usage}\n```\n\n"));

    let is_root = path.len() == 1;
    let (inherited, local): (Vec<&Arg>, Vec<&Arg>) = cmd
        .get_arguments()
        .filter(|arg| !arg.is_positional() && !arg.is_hide_set())
        .filter(|arg| !matches!(arg.get_id().as_str(), "help" | "version"))
        .partition(|arg| arg.is_global_set() && !is_root);

    if !local.is_empty() {
        out.push_str(&format!("### Options\n\n```\n{}```\n\n", flag_table(&local)));
    }
    if !inherited.is_empty() {
        out.push_str(&format!(
            "### Options inherited from parent commands\n\n```\n{}```\n\n",
            flag_table(&inherited)
        ));
    }

    out.push_str("### SEE ALSO\n\n");
    if let Some((_, parent)) = path.split_last().filter(|(_, parent)| !parent.is_empty()) {
        out.push_str(&see_also(parent, "parent command", opts));
    }
    for sub in cmd.get_subcommands() {
        if sub.is_hide_set() || sub.get_name() == "help" {
            continue;
        }
        let mut sub_path = path.to_vec();
        sub_path.push(sub.get_name().to_string());
        let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
        out.push_str(&see_also(&sub_path, &about, opts));
    }
    out
}

fn see_also(path: &[String], about: &str, opts: &Opts) -> String {
    format!(
        "* [{}]({})\t - {about}\n",
        path.join(" "),
        link(&base_name(path), opts)
    )
}

fn flag_table(args: &[&Arg]) -> String {
    let rows: Vec<(String, String)> = args.iter().map(|arg| flag_row(arg)).collect();
    let width = rows.iter().map(|(flag, _)| flag.len()).max().unwrap_or(0);
    rows.into_iter()
        .map(|(flag, help)| format!("{flag:width$}   {help}\n"))
        .collect()
}

fn flag_row(arg: &Arg) -> (String, String) {
    let mut flag = match arg.get_short() {
        Some(short) => format!("  -{short}, "),
        None => "      ".to_string(),
    };
    if let Some(long) = arg.get_long() {
        flag.push_str(&format!("--{long}"));
    }
    if arg.get_action().takes_values() {
        flag.push_str(" string");
    }

    let mut help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
    let defaults: Vec<String> = arg
        .get_default_values()
        .iter()
        .map(|v| v.to_string_lossy().into_owned())
        .filter(|v| !v.is_empty())
        .collect();
    if !defaults.is_empty() {
        help.push_str(&format!(" (default \"{}\")", defaults.join(",")));
    }
    (flag, help)
}
