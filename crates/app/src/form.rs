//! 终端表单：逐项询问标的、区间、粒度与图表样式。

use candela_core::common::{ChartStyle, Interval, Period, ViewRequest};
use candela_core::config::ViewConfig;
use std::fmt::Display;
use tokio::io::{self, AsyncBufRead, AsyncWrite, AsyncWriteExt, Lines};

/// # Summary
/// 表单当前值。每项默认沿用上一次提交的值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub symbol: String,
    pub period: Period,
    pub interval: Interval,
    pub style: ChartStyle,
}

impl From<&ViewConfig> for FormState {
    fn from(config: &ViewConfig) -> Self {
        let request = config.initial_request();
        Self {
            symbol: request.symbol,
            period: request.period,
            interval: request.interval,
            style: request.style,
        }
    }
}

impl FormState {
    fn to_request(&self) -> ViewRequest {
        ViewRequest::new(self.symbol.clone(), self.period, self.interval, self.style)
    }
}

/// 一次表单交互的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    Submit(ViewRequest),
    Quit,
}

enum Answer<T> {
    Value(T),
    Quit,
}

fn joined<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// # Summary
/// 询问单个字段，直到得到合法输入、空输入（沿用当前值）或退出指令。
///
/// # Logic
/// 1. 打印 `label [current] (options): ` 提示。
/// 2. EOF 或 `quit` / `exit` 视为退出。
/// 3. 空行沿用当前值。
/// 4. 解析失败时打印错误并重新询问。
async fn ask<T, R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
    label: &str,
    current: &T,
    options: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> io::Result<Answer<T>>
where
    T: Display + Clone,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        out.write_all(format!("{} [{}] ({}): ", label, current, options).as_bytes())
            .await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            return Ok(Answer::Quit);
        };
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("quit") || answer.eq_ignore_ascii_case("exit") {
            return Ok(Answer::Quit);
        }
        if answer.is_empty() {
            return Ok(Answer::Value(current.clone()));
        }
        match parse(answer) {
            Ok(value) => return Ok(Answer::Value(value)),
            Err(err) => out.write_all(format!("  {}\n", err).as_bytes()).await?,
        }
    }
}

/// # Summary
/// 读取一次完整的表单提交。
///
/// # Logic
/// 1. 依次询问 Symbol、Period、Interval、Chart Type。
/// 2. 每项的合法输入立即写回 `state`，作为下一次的默认值。
/// 3. 任一项收到退出指令即返回 `FormInput::Quit`。
///
/// # Arguments
/// * `lines`: 输入行流。
/// * `out`: 提示输出。
/// * `state`: 表单当前值。
/// * `suggestions`: 代码建议列表，仅用于提示。
///
/// # Returns
/// `Submit(ViewRequest)` 或 `Quit`；读写失败返回 io::Error。
pub async fn read_request<R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
    state: &mut FormState,
    suggestions: &[String],
) -> io::Result<FormInput>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let symbols = suggestions.join(", ");
    match ask(lines, out, "Symbol", &state.symbol, &symbols, |s| Ok(s.to_string())).await? {
        Answer::Value(symbol) => state.symbol = symbol,
        Answer::Quit => return Ok(FormInput::Quit),
    }

    let periods = joined(Period::ALL);
    match ask(lines, out, "Period", &state.period, &periods, |s| s.parse()).await? {
        Answer::Value(period) => state.period = period,
        Answer::Quit => return Ok(FormInput::Quit),
    }

    let intervals = joined(Interval::ALL);
    match ask(lines, out, "Interval", &state.interval, &intervals, |s| s.parse()).await? {
        Answer::Value(interval) => state.interval = interval,
        Answer::Quit => return Ok(FormInput::Quit),
    }

    let styles = joined(ChartStyle::ALL);
    match ask(lines, out, "Chart Type", &state.style, &styles, |s| s.parse()).await? {
        Answer::Value(style) => state.style = style,
        Answer::Quit => return Ok(FormInput::Quit),
    }

    Ok(FormInput::Submit(state.to_request()))
}
