//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Procedural macro attribute that generates a `SolutionRunner` implementation.
///
/// This macro automates the implementation of the `SolutionRunner` trait for Advent of Code
/// solutions, routing `run` to the appropriate solver function and `check` to the matching
/// example-checking function.
///
/// # Properties
///
/// - `name` (required): An expression that evaluates to `&str`, representing the solution's
///   display name.
///   Can be a string literal or a constant.
///
/// - `part_one` (required): The type implementing `Solution<PartOne>` for solving part one.
///
/// - `part_two` (required): The type implementing `Solution<PartTwo>` for solving part two.
///
/// - `parsed` (optional): A type that implements `ParseData`, used to parse input before solving.
///   If omitted, the unparsed input string is passed directly to solvers.
///
/// - `examples` (optional): An expression that evaluates to `&[Example]`, the recorded examples
///   to check the solution against.
///   If omitted, the solution has no examples and checking reports such.
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to anything other than a struct or impl block
/// - Required properties (`name`, `part_one`, `part_two`) are missing
/// - Any property is specified more than once
/// - An unsupported property is provided
///
/// # Examples
///
/// ## With string input
///
/// With a struct `Day01` implementing `Solution<PartOne>` & `Solution<PartTwo>`:
///
/// ```ignore
/// #[solution_runner(name = "Day 1", part_one = Day01, part_two = Day01)]
/// struct Day01Runner;
/// ```
///
/// ## With `parsed`
///
/// With a struct `Circuit` implementing `ParseData`, a struct `Day07` implementing both parts,
/// and a struct `AdventOfCodeSolutions<const DAY: u8>` for solutions to run:
///
/// ```ignore
/// #[solution_runner(name = "Day 7", parsed = Circuit, part_one = Day07, part_two = Day07)]
/// impl AdventOfCodeSolutions<7> {}
/// ```
///
/// ## With `examples`
///
/// With a constant `EXAMPLES: &[Example]` of recorded inputs and expected outputs:
///
/// ```ignore
/// #[solution_runner(name = "Day 2", part_one = Day02, part_two = Day02, examples = EXAMPLES)]
/// struct Day02;
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    // The expression to use as a solution name; should resolve to string slice
    let mut name_expr_opt: Option<Expr> = None;
    // The type to use for a `ParseData` generic parameter
    let mut parsed_ty_opt: Option<Type> = None;
    // The type to use for a `Solution<PartOne>` generic parameter
    let mut part_one_ty_opt: Option<Type> = None;
    // The type to use for a `Solution<PartTwo>` generic parameter
    let mut part_two_ty_opt: Option<Type> = None;
    // The expression to use as recorded examples; should resolve to an `Example` slice
    let mut examples_expr_opt: Option<Expr> = None;

    let solution_runner_parser = syn::meta::parser(|meta| {
        // check for expected property keys, track value, error if a duplicate key appears
        if meta.path.is_ident("name") {
            if name_expr_opt.is_some() {
                return Err(meta.error("duplicate 'name' property"));
            }
            name_expr_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("parsed") {
            if parsed_ty_opt.is_some() {
                return Err(meta.error("duplicate 'parsed' property"));
            }
            parsed_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_one") {
            if part_one_ty_opt.is_some() {
                return Err(meta.error("duplicate 'part_one' property"));
            }
            part_one_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_two") {
            if part_two_ty_opt.is_some() {
                return Err(meta.error("duplicate 'part_two' property"));
            }
            part_two_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("examples") {
            if examples_expr_opt.is_some() {
                return Err(meta.error("duplicate 'examples' property"));
            }
            examples_expr_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with solution_runner_parser);

    // enforce required properties
    let name_expr: Expr = match name_expr_opt {
        Some(value) => value,
        None => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "missing required property: 'name'",
            )
            .to_compile_error()
            .into();
        }
    };
    let part_one_ty: Type = match part_one_ty_opt {
        Some(value) => value,
        None => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "missing required property: 'part_one'",
            )
            .to_compile_error()
            .into();
        }
    };
    let part_two_ty: Type = match part_two_ty_opt {
        Some(value) => value,
        None => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "missing required property: 'part_two'",
            )
            .to_compile_error()
            .into();
        }
    };

    // without recorded examples, default to an empty slice so checking reports no examples
    let examples_expr = examples_expr_opt.map_or_else(|| quote! { &[] }, |expr| quote! { #expr });

    let (solve_function_call, check_function_call) = match parsed_ty_opt {
        None => (
            quote! {
                aoc_framework::runner::solve_full_solution::<#part_one_ty, #part_two_ty>(
                    #name_expr,
                    header,
                    input,
                    handler,
                    timed
                )
            },
            quote! {
                aoc_framework::runner::check_full_solution::<#part_one_ty, #part_two_ty>(
                    #name_expr,
                    #examples_expr,
                    handler
                )
            },
        ),
        Some(parsed_ty) => (
            quote! {
                aoc_framework::runner::solve_parsed_full_solution::<
                    #parsed_ty,
                    #part_one_ty,
                    #part_two_ty
                >(#name_expr, header, input, handler, timed)
            },
            quote! {
                aoc_framework::runner::check_parsed_full_solution::<
                    #parsed_ty,
                    #part_one_ty,
                    #part_two_ty
                >(#name_expr, #examples_expr, handler)
            },
        ),
    };

    let original_input = input.clone(); // clone before macro consumes input
    let item = parse_macro_input!(input as Item);

    let runner_ty = match item {
        // extract struct name through `ident`, or the type from an impl block through `self_ty`
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    let impl_solution_runner_block = quote! {
        impl aoc_framework::runner::SolutionRunner for #runner_ty {
            fn run(
                header: &dyn ::std::fmt::Display,
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool
            ) -> aoc_framework::DynamicResult<()> {
                #solve_function_call
            }

            fn check(
                handler: &mut dyn aoc_framework::runner::OutputHandler
            ) -> aoc_framework::DynamicResult<()> {
                #check_function_call
            }
        }
    };

    let input_ts = proc_macro2::TokenStream::from(original_input);
    TokenStream::from(quote! {
        #input_ts
        #impl_solution_runner_block
    })
}
