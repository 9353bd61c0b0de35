/*!
# Introductory Tutorial for RPN

Begin by opening a terminal and running the executable. If you get the
following, you are ready for this tutorial. Type CTRL-D or `q` to exit.
<pre><code>&nbsp;  RPN calculator. Type help for a list of words, q to quit.
&nbsp;> █
</code></pre>

 Stop a runaway loop with CTRL-C.

Everything you type is split on whitespace into words. Numbers are pushed
onto the stack. Every other word takes its operands from the stack and
pushes its results back. There are no parentheses and no precedence, the
order of the words is the order of evaluation.

<pre><code>&nbsp;> 10 6 4 - / p
&nbsp;  5
</code></pre>

Here 6 and 4 are subtracted first, then 10 is divided by the 2. The `p`
word prints the top of the stack without removing it. Use `ds` to see the
whole stack, bottom first.

<pre><code>&nbsp;> ds
&nbsp;  Stack: [5]
</code></pre>

## Complex numbers

A number ending in `j` is imaginary. A real number immediately followed by
an imaginary one is read as a single complex number.

<pre><code>&nbsp;> clear 3 4j abs p
&nbsp;  5
&nbsp;> 2j 2j * p
&nbsp;  -4
</code></pre>

`real` and `imag` extract parts, `c2r` splits a complex number into both,
and `r2c` turns a real number into a complex one.

## Precision

Numbers print with as many digits as needed to read them back exactly.
`frdigit` (or `precision`, or `k`) fixes the number of fractional digits,
`0 frdigit` restores the default and `K` pushes the current setting.

<pre><code>&nbsp;> 4 frdigit 1 3 / p
&nbsp;  0.3333
</code></pre>

## Registers and vectors

There are 256 registers, numbered 0 to 255. `save` stores the value below
the register number, `load` brings it back.

<pre><code>&nbsp;> 42 7 save 7 load p
&nbsp;  42
</code></pre>

Vectors are created with a length and a number, then addressed by index.

<pre><code>&nbsp;> 10 3 vreal
&nbsp;> 2.5 4 3 vsave
&nbsp;> 4 3 vload p
&nbsp;  2.5
</code></pre>

## Subroutines and loops

`:` starts a definition and `;` ends it. A definition may span several
lines. Calling a subroutine runs its words as if they had been typed.

<pre><code>&nbsp;> : sq dup * ;
&nbsp;> 7 sq p
&nbsp;  49
</code></pre>

A loop runs its body, then pops the top of the stack. The body repeats
until that value is zero.

<pre><code>&nbsp;> 3 [ 1 - p dup ]
&nbsp;  2
&nbsp;  1
&nbsp;  0
</code></pre>

Type `help` for the full list of words.
*/
