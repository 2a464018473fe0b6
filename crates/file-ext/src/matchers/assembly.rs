//! Assembly listing heuristic.

/// Register and mnemonic tokens from x86, ARM and PowerPC listings. Padding
/// keeps short mnemonics from matching inside ordinary words; `and` is left
/// out because prose is full of it.
static TOKENS: &[&str] = &[
	// registers
	",cl ", " eax,", "eax ", " edx,", "edx ",
	// instructions
	" add ", " addi ", " addis ", " align ", " ands ", " asr ", " b ", " bcl ", " bctr ",
	" beq ", " bgt ", " bhi ", " bl ", " blo ", " blr", " bne ", " bswap ", " bt ", " bts ",
	" call ", " cbnz ", " cbz ", " cld ", " cmeq ", " cmp ", " cmpi ", " cmpsb ", " cmpwi ",
	" dcb ", " dec ", " div ", " ends ", " eor ", " equ ", " extsb ", " fmov ", " imul ",
	" inc ", " int ", " ja ", " jae ", " jb ", " jbe ", " jc ", " je ", " jecxz ", " jge ",
	" jmp ", " jnb ", " jnc ", " jne ", " jns ", " jnz ", " jz ", " lbz ", " ld1 ", " ldr ",
	" ldrb ", " lds ", " lea ", " les ", " lfd ", " lfs ", " lg ", " lha ", " lhz ",
	" lwz ", " lwzu", " mflr ", " mov ", " movapd ", " movaps ", " movd ", " movdqa ",
	" movdqu ", " movntps ", " movq ", " movups ", " movzx ", " mr ", " mtctr ", " mtlr ",
	" mul ", " neg ", " nop ", " nop", " not ", " or ", " pop ", " push ", " rcr ", " rep ",
	" repe ", " repne ", " ret ", " sar ", " sbb ", " sg ", " sgu ", " shl ", " shld ",
	" shr ", " shrd ", " slwi ", " srdi ", " std ", " stfd ", " sub ", " subs ", " test ",
	" umaxv ", " uminv ", " xchg ", " xor ",
];

/// `true` once `signature` contains more than `threshold` distinct tokens.
///
/// Scanning stops at the first token past the threshold.
#[must_use]
pub fn looks_like_assembly(signature: &str, threshold: usize) -> bool {
	TOKENS
		.iter()
		.filter(|token| signature.contains(*token))
		.nth(threshold)
		.is_some()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn x86_listing() {
		let listing = "start: mov eax, 1 push ebx call func cmp eax, 0 jne done xor edx, edx ret";
		assert!(looks_like_assembly(listing, 5));
	}

	#[test]
	fn powerpc_listing() {
		let listing = "_main: mflr r0 stw r0,8(r1) lwz r3,0(r4) addi r1,r1,16 mtlr r0 blr nop ";
		assert!(looks_like_assembly(listing, 5));
	}

	#[test]
	fn prose_is_not_assembly() {
		let prose = "Call me when you are done or test the new int parser and then push the branch";
		assert!(!looks_like_assembly(prose, 5));
	}

	#[test]
	fn exactly_threshold_tokens_is_not_enough() {
		// call, push, pop, ret, mov
		let listing = "x call y push z pop w ret v mov u";
		assert!(!looks_like_assembly(listing, 5));
		assert!(looks_like_assembly(listing, 4));
	}
}
