use crate::application::command::{Command, Operation};
use crate::domain::response::TransactionResult;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

/// The output row for one processed operation.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ResultRow {
    pub order_id: Option<String>,
    pub operation: Operation,
    pub success: bool,
    pub authorization: String,
    pub message: String,
    pub test: bool,
}

impl ResultRow {
    pub fn new(command: &Command, result: &TransactionResult) -> Self {
        Self {
            order_id: command.options().order_id.clone(),
            operation: command.operation(),
            success: result.success,
            authorization: result.authorization.clone(),
            message: result.message.clone(),
            test: result.test,
        }
    }
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes result rows as CSV (with header) or JSON lines.
pub struct ResultWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(target: W, format: OutputFormat) -> Self {
        let sink = match format {
            OutputFormat::Csv => Sink::Csv(csv::Writer::from_writer(target)),
            OutputFormat::Json => Sink::Json(target),
        };
        Self { sink }
    }

    pub fn write(&mut self, row: &ResultRow) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.serialize(row)?,
            Sink::Json(writer) => {
                serde_json::to_writer(&mut *writer, row)?;
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.flush()?,
            Sink::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::options::TransactionOptions;
    use crate::domain::response::ResponseRecord;

    fn row(raw: &str) -> ResultRow {
        let command = Command::Capture {
            money: Money::from_minor(100),
            authorization: "9001".to_string(),
            options: TransactionOptions::with_order_id("order-1"),
        };
        let result = TransactionResult::from_record(ResponseRecord::parse(raw).unwrap(), true);
        ResultRow::new(&command, &result)
    }

    #[test]
    fn test_csv_output() {
        let mut buffer = Vec::new();
        {
            let mut writer = ResultWriter::new(&mut buffer, OutputFormat::Csv);
            writer.write(&row("A|9002|M|AUTH|Captured")).unwrap();
            writer.write(&row("D|0||X|Card declined")).unwrap();
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "order_id,operation,success,authorization,message,test\n\
             order-1,capture,true,9002,Captured,true\n\
             order-1,capture,false,0,Card declined,true\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut buffer = Vec::new();
        {
            let mut writer = ResultWriter::new(&mut buffer, OutputFormat::Json);
            writer.write(&row("A|9002|M|AUTH|Captured")).unwrap();
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(value["order_id"], "order-1");
        assert_eq!(value["operation"], "capture");
        assert_eq!(value["success"], true);
        assert_eq!(value["authorization"], "9002");
    }
}
