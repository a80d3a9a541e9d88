//! Interactive menu driver for [`crate::processor::AccountProcessor`]. It only
//! reads input and renders results, all decisions are made by the processor.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::{
    command::{AccountCommand, MenuChoice, parse_amount},
    processor::AccountProcessor,
};
use menu_printer::{
    CHOICE_PROMPT, CURRENT_PIN_PROMPT, DEPOSIT_PROMPT, FAREWELL, NEW_PIN_PROMPT, PIN_PROMPT,
    WITHDRAW_PROMPT, print_error, print_event, print_history, print_menu, print_prompt,
};
use prompt_reader::read_line;
pub mod menu_printer;
pub mod prompt_reader;

enum Step {
    Continue,
    Stop,
}

pub struct Service<'w, R, W: 'w, P> {
    pub input: R,
    pub output: &'w mut W,
    pub processor: P,
}

impl<'w, R, W, P> Service<'w, R, W, P>
where
    R: BufRead,
    W: Write + 'w,
    P: AccountProcessor,
{
    /// Runs the menu loop until the user exits or the input ends, then hands
    /// the processor back.
    pub fn run(mut self) -> Result<P> {
        tracing::info!("session started");
        loop {
            print_menu(self.output)?;
            let Some(line) = self.ask(CHOICE_PROMPT)? else {
                break;
            };
            let choice = line.parse::<MenuChoice>();

            if let Ok(MenuChoice::Exit) = choice {
                writeln!(self.output, "{FAREWELL}")?;
                break;
            }

            // every choice but exit is gated, unknown ones included
            if !self.processor.is_authenticated() {
                let Some(pin) = self.ask(PIN_PROMPT)? else {
                    break;
                };
                if let Err(err) = self.processor.authenticate(&pin) {
                    print_error(self.output, &err)?;
                    continue;
                }
            }

            let step = match choice {
                Ok(choice) => self.handle_choice(choice)?,
                Err(err) => {
                    print_error(self.output, &err.into())?;
                    Step::Continue
                }
            };
            if let Step::Stop = step {
                break;
            }
        }
        tracing::info!("session ended");
        Ok(self.processor)
    }

    fn handle_choice(&mut self, choice: MenuChoice) -> Result<Step> {
        let command = match choice {
            MenuChoice::BalanceInquiry => AccountCommand::BalanceInquiry,
            MenuChoice::Deposit | MenuChoice::Withdraw => {
                let prompt = if choice == MenuChoice::Deposit {
                    DEPOSIT_PROMPT
                } else {
                    WITHDRAW_PROMPT
                };
                let Some(input) = self.ask(prompt)? else {
                    return Ok(Step::Stop);
                };
                let amount = match parse_amount(&input) {
                    Ok(amount) => amount,
                    Err(err) => {
                        print_error(self.output, &err.into())?;
                        return Ok(Step::Continue);
                    }
                };
                if choice == MenuChoice::Deposit {
                    AccountCommand::Deposit { amount }
                } else {
                    AccountCommand::Withdraw { amount }
                }
            }
            MenuChoice::ChangePin => {
                let Some(old_pin) = self.ask(CURRENT_PIN_PROMPT)? else {
                    return Ok(Step::Stop);
                };
                let Some(new_pin) = self.ask(NEW_PIN_PROMPT)? else {
                    return Ok(Step::Stop);
                };
                AccountCommand::ChangePin {
                    old_pin: old_pin.into(),
                    new_pin: new_pin.into(),
                }
            }
            MenuChoice::TransactionHistory => {
                match self.processor.history() {
                    Ok(entries) => print_history(self.output, entries)?,
                    Err(err) => print_error(self.output, &err)?,
                }
                return Ok(Step::Continue);
            }
            MenuChoice::Exit => return Ok(Step::Stop),
        };
        self.perform(command)?;
        Ok(Step::Continue)
    }

    fn perform(&mut self, command: AccountCommand) -> Result<()> {
        match self.processor.process(command) {
            Ok(event) => print_event(self.output, &event),
            Err(err) => print_error(self.output, &err),
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print_prompt(self.output, prompt)?;
        read_line(&mut self.input).context("Failed to read from input")
    }
}
