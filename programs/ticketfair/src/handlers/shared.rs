use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

// Move lamports through the System Program.
// If `from` is a PDA, owning_pda_seeds must be provided.
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
    system_program: &Program<'info, System>,
    owning_pda_seeds: Option<&[&[u8]]>,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let transfer_accounts = Transfer {
        from: from.clone(),
        to: to.clone(),
    };

    // Only one signer seed (the PDA that owns the lamports) is needed, so we create an array with the seeds
    let signers_seeds = owning_pda_seeds.map(|seeds| [seeds]);

    transfer(
        if let Some(seeds_arr) = signers_seeds.as_ref() {
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                transfer_accounts,
                seeds_arr,
            )
        } else {
            CpiContext::new(system_program.to_account_info(), transfer_accounts)
        },
        amount,
    )
}
