use crate::core::{AccountSummary, PagedResourceList};
use crate::utils::error::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

const HEADERS: [&str; 5] = ["first_name", "last_name", "email", "status", "created_on"];

/// 將帳號摘要輸出到終端或檔案
pub struct AccountWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn write_page(&mut self, page: &PagedResourceList<AccountSummary>) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, page)?;
                writeln!(self.out)?;
            }
            _ => {
                self.write_accounts(page.items())?;
                if self.format == OutputFormat::Table {
                    writeln!(
                        self.out,
                        "-- {} of {} (offset {})",
                        page.len(),
                        page.total(),
                        page.offset_by()
                    )?;
                }
            }
        }
        Ok(())
    }

    pub fn write_accounts(&mut self, accounts: &[AccountSummary]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, accounts)?;
                writeln!(self.out)?;
            }
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(&mut self.out);
                wtr.write_record(HEADERS)?;
                for account in accounts {
                    wtr.write_record(Self::row(account))?;
                }
                wtr.flush()?;
            }
            OutputFormat::Table => {
                let rows: Vec<[String; 5]> = accounts.iter().map(Self::row).collect();
                let mut widths = HEADERS.map(str::len);
                for row in &rows {
                    for (width, cell) in widths.iter_mut().zip(row.iter()) {
                        *width = (*width).max(cell.chars().count());
                    }
                }

                let header = HEADERS.map(str::to_string);
                for row in std::iter::once(&header).chain(rows.iter()) {
                    let line: Vec<String> = row
                        .iter()
                        .zip(widths.iter())
                        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                        .collect();
                    writeln!(self.out, "{}", line.join("  ").trim_end())?;
                }
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn row(account: &AccountSummary) -> [String; 5] {
        [
            account.first_name.clone(),
            account.last_name.clone(),
            account.email.clone(),
            account.status.to_string(),
            account
                .created_on
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
        ]
    }
}
